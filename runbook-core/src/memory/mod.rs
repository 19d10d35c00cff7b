//! Persistent solution memory.
//!
//! Handles the append-only `solutions.md` log and the read-only
//! `patterns.md` notes kept next to it.

pub mod manager;
pub mod search;
pub mod storage;

pub use manager::{insert_entry, MemoryStore};
pub use search::{search_lines, ContextLine, SearchHit};
pub use storage::{store_template, SolutionEntry};
