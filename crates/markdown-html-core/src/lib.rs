//! markdown-html Core
//!
//! This crate provides the core types and error definitions
//! for the markdown-html converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`LineCursor`] - Position within the input lines
//! - [`HtmlSink`] - Append-only HTML output buffer
//! - [`ParseState`] - Cursor and sink for one parse call
//! - [`BlockKind`] - The block construct a rule produces
//! - [`MarkdownError`] - Error types

pub mod cursor;
pub mod enums;
pub mod error;
pub mod sink;
pub mod state;

pub use cursor::LineCursor;
pub use enums::BlockKind;
pub use error::{MarkdownError, Result};
pub use sink::HtmlSink;
pub use state::ParseState;
