// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A message flows through normalization, the bypass check, header parsing
//! and the built-in rules. The [`RuleEngine`] drives the pipeline and hands
//! the resulting [`ValidationReport`] to a reporter.

mod builtin;
mod bypass;
mod catalog;
mod engine;
mod validator;

pub use builtin::{apply_builtin_rules, RulePolicy};
pub use bypass::{classify, Bypass};
pub use catalog::{BuiltinCatalog, ConventionalType, TypeCatalog};
pub use engine::RuleEngine;
pub use validator::{Disposition, ValidationOutcome, ValidationReport};
