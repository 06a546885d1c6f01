//! # Editing state
//!
//! The buffer, its window, the yank registers, and the literal search that
//! the command layer drives.
pub mod buffer;
pub mod registers;
pub mod search;
pub mod window;
