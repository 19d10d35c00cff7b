//! Directive documents
//!
//! Directives are Markdown files of operator instructions, one file per
//! directive, identified by file stem. They are maintained by hand and only
//! ever read here.

pub mod library;

pub use library::{Directive, DirectiveLibrary};
