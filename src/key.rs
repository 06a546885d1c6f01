//! # Input rune vocabulary
//!
//! ## Overview
//!
//! Input reaches the editor core as a stream of [Rune] values: decoded Unicode
//! scalars, plus sentinel values above U+10FFFF for keys that have no scalar of
//! their own (Escape, Backspace, arrows, paging keys, function keys). Control
//! chords arrive as their C0 code points (`Ctrl-E` is rune 5), matching what a
//! terminal would produce.
//!
//! [Rune::from_event] converts a [crossterm] key event into a rune so that
//! terminal frontends can feed the core directly.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single unit of input: a Unicode scalar value or a special-key sentinel.
///
/// Buffer contents are runes as well, so anything typed in insertion mode can
/// be stored verbatim.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rune(pub u32);

/// First code point of the special-key range, just past U+10FFFF.
const SPECIAL: u32 = 0x0011_0000;

impl Rune {
    /// The NUL rune, used as an "unset" argument.
    pub const NUL: Rune = Rune(0);

    /// The Escape key.
    pub const ESC: Rune = Rune(SPECIAL);

    /// The Backspace key.
    pub const BACKSPACE: Rune = Rune(SPECIAL + 1);

    /// The Up arrow key.
    pub const UP: Rune = Rune(SPECIAL + 2);

    /// The Down arrow key.
    pub const DOWN: Rune = Rune(SPECIAL + 3);

    /// The Left arrow key.
    pub const LEFT: Rune = Rune(SPECIAL + 4);

    /// The Right arrow key.
    pub const RIGHT: Rune = Rune(SPECIAL + 5);

    /// The Page Up key.
    pub const PAGE_UP: Rune = Rune(SPECIAL + 6);

    /// The Page Down key.
    pub const PAGE_DOWN: Rune = Rune(SPECIAL + 7);

    /// The F1 key. F2 through F12 follow contiguously.
    pub const F1: Rune = Rune(SPECIAL + 8);

    /// The F12 key.
    pub const F12: Rune = Rune(SPECIAL + 19);

    /// Return the function key `Fn` for `n` in 1..=12.
    pub const fn function(n: u8) -> Option<Rune> {
        if n >= 1 && n <= 12 {
            Some(Rune(Self::F1.0 + n as u32 - 1))
        } else {
            None
        }
    }

    /// The rune's value as an ASCII code point, if it is one.
    pub fn as_ascii(&self) -> Option<u8> {
        if self.0 < 0x80 {
            Some(self.0 as u8)
        } else {
            None
        }
    }

    /// The rune's value as a [char], if it is a Unicode scalar.
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Whether this rune is a decimal digit, and its value if so.
    pub fn ascii_digit(&self) -> Option<u16> {
        match self.0 {
            d @ 0x30..=0x39 => Some((d - 0x30) as u16),
            _ => None,
        }
    }

    /// Whether this rune is a space or a tab.
    pub fn is_blank(&self) -> bool {
        self.0 == 0x20 || self.0 == 0x09
    }

    /// Whether this rune is whitespace in the classic `isspace` sense.
    pub fn is_space(&self) -> bool {
        matches!(self.0, 0x20 | 0x09..=0x0D)
    }

    /// The word-constituent predicate used by the lowercase word motions.
    ///
    /// ASCII letters, digits, underscore, and the Latin-1 range 0xC0..=0xFF.
    /// The Latin-1 range is a coarse stand-in for "alphabetic above ASCII"
    /// inherited from the original key tables; it is not extended further.
    pub fn is_word(&self) -> bool {
        matches!(self.0, 0x30..=0x39 | 0x41..=0x5A | 0x5F | 0x61..=0x7A | 0xC0..=0xFF)
    }

    /// Convert a terminal key event into a rune, if it maps to one.
    ///
    /// Control chords over letters become C0 code points; Enter and Tab become
    /// `'\n'` and `'\t'`; special keys become their sentinels. Events with no
    /// rune equivalent (modifier-only presses, media keys) yield `None`.
    pub fn from_event(ev: &KeyEvent) -> Option<Rune> {
        let rune = match ev.code {
            KeyCode::Esc => Rune::ESC,
            KeyCode::Backspace => Rune::BACKSPACE,
            KeyCode::Up => Rune::UP,
            KeyCode::Down => Rune::DOWN,
            KeyCode::Left => Rune::LEFT,
            KeyCode::Right => Rune::RIGHT,
            KeyCode::PageUp => Rune::PAGE_UP,
            KeyCode::PageDown => Rune::PAGE_DOWN,
            KeyCode::F(n) => return Rune::function(n),
            KeyCode::Enter => Rune::from('\n'),
            KeyCode::Tab => Rune::from('\t'),
            KeyCode::Char(c) => {
                if ev.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() {
                    Rune(c.to_ascii_uppercase() as u32 - b'A' as u32 + 1)
                } else {
                    Rune::from(c)
                }
            },
            _ => return None,
        };

        Some(rune)
    }
}

impl From<char> for Rune {
    fn from(c: char) -> Rune {
        Rune(c as u32)
    }
}

impl PartialEq<char> for Rune {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other as u32
    }
}
