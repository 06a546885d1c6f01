//! # vicmd
//!
//! ## Overview
//!
//! This crate implements the command language core of a modal, vi-style text
//! editor: the parser that turns a stream of input [runes](key::Rune) into
//! structured commands, the catalogs of motions and actions those commands
//! name, the insertion-mode interpreter with count and repeat replay, and the
//! yank-register ring.
//!
//! The core is deliberately small and headless. It owns a [Buffer] (runes,
//! marks, undo log) through a focused [Window], and delegates everything that
//! touches the surrounding application — diagnostics, window layout, running
//! commands, persisting, quitting — to a [Host] implementation.
//!
//! ## Example
//!
//! ```
//! use vicmd::{Buffer, Editor, NullHost, Rune, Window};
//!
//! let mut ed = Editor::new(Window::new(Buffer::from("hello world\n"), 24));
//! let mut host = NullHost;
//!
//! for ch in "dw".chars() {
//!     ed.feed(Rune::from(ch), &mut host);
//! }
//!
//! assert_eq!(ed.win.eb.to_string(), "world\n");
//! ```
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_return)]

pub mod command;
pub mod editing;
pub mod errors;
pub mod key;

pub use self::command::{Cmd, Dir, Editor, Host, Mode, Motion, NullHost};
pub use self::editing::buffer::{Buffer, SEL_BEG, SEL_END};
pub use self::editing::registers::{Registers, YankBuf};
pub use self::editing::window::Window;
pub use self::errors::{EditError, EditResult};
pub use self::key::Rune;
