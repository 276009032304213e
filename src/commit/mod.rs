// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for message normalization, header parsing and sources.

mod header;
mod message;
mod source;

pub use header::CommitHeader;
pub use message::{replace_header, NormalizedMessage};
pub use source::{is_lossy, MessageSource, STDIN_ARG};
