//! # Keys table
//!
//! ## Overview
//!
//! One fixed 128-entry table maps ASCII code points to their classification
//! flags and handler. It is the single source of truth the parser consults:
//! whether a rune is a motion, whether it consumes a motion, whether it may
//! double (`dd`), whether it takes an argument rune, and whether an
//! unspecified count stays 0 instead of defaulting to 1.
//!
//! An entry holds exactly one handler, discriminated by [Bind]; `IS_MOTION`
//! and `HAS_MOTION` are mutually exclusive within an entry.
use bitflags::bitflags;

use super::{action, motion, Cmd, Editor, Host, Motion};
use crate::errors::EditResult;

bitflags! {
    /// Classification flags for one keys-table entry.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct KeyFlags: u8 {
        /// The entry is a motion and may fill the motion slot.
        const IS_MOTION = 1 << 0;

        /// The entry is an operator that consumes a motion.
        const HAS_MOTION = 1 << 1;

        /// Typing the key twice selects whole lines (`dd`, `yy`, `cc`).
        const IS_DOUBLE = 1 << 2;

        /// The entry takes one argument rune (`f`, `m`, marks, `^L`).
        const HAS_ARG = 1 << 3;

        /// An unspecified count stays 0 rather than defaulting to 1.
        const ZERO_COUNT = 1 << 4;
    }
}

pub(crate) type MotionFn = fn(&mut Editor, bool, &Cmd) -> EditResult<Motion>;
pub(crate) type ActionFn = fn(&mut Editor, &mut dyn Host, Option<char>, &Cmd, Cmd) -> EditResult<()>;

/// The handler half of a keys-table entry.
#[derive(Clone, Copy)]
pub(crate) enum Bind {
    Motion(MotionFn),
    Action(ActionFn),
}

/// Flags plus handler for one ASCII code point.
#[derive(Clone, Copy)]
pub(crate) struct KeyEntry {
    pub flags: KeyFlags,
    pub bind: Bind,
}

/// Look up the entry for an ASCII code point.
pub(crate) fn entry(code: u8) -> Option<&'static KeyEntry> {
    KEYS[(code & 0x7f) as usize].as_ref()
}

const fn mo(extra: KeyFlags, f: MotionFn) -> Option<KeyEntry> {
    Some(KeyEntry {
        flags: KeyFlags::IS_MOTION.union(extra),
        bind: Bind::Motion(f),
    })
}

const fn ac(flags: KeyFlags, f: ActionFn) -> Option<KeyEntry> {
    Some(KeyEntry { flags, bind: Bind::Action(f) })
}

const NONE: KeyFlags = KeyFlags::empty();
const OPERATOR: KeyFlags = KeyFlags::HAS_MOTION.union(KeyFlags::IS_DOUBLE);

const CTRL_D: usize = 0x04;
const CTRL_E: usize = 0x05;
const CTRL_I: usize = 0x09;
const CTRL_L: usize = 0x0c;
const CTRL_Q: usize = 0x11;
const CTRL_T: usize = 0x14;
const CTRL_U: usize = 0x15;
const CTRL_W: usize = 0x17;
const CTRL_Y: usize = 0x19;

static KEYS: [Option<KeyEntry>; 128] = build();

const fn build() -> [Option<KeyEntry>; 128] {
    let mut t: [Option<KeyEntry>; 128] = [None; 128];

    t[b'h' as usize] = mo(NONE, motion::m_hl);
    t[b'l' as usize] = mo(NONE, motion::m_hl);
    t[b'j' as usize] = mo(NONE, motion::m_jk);
    t[b'k' as usize] = mo(NONE, motion::m_jk);
    t[b't' as usize] = mo(KeyFlags::HAS_ARG, motion::m_find);
    t[b'T' as usize] = mo(KeyFlags::HAS_ARG, motion::m_find);
    t[b'f' as usize] = mo(KeyFlags::HAS_ARG, motion::m_find);
    t[b'F' as usize] = mo(KeyFlags::HAS_ARG, motion::m_find);
    t[b';' as usize] = mo(NONE, motion::m_findrep);
    t[b',' as usize] = mo(NONE, motion::m_findrep);
    t[b'0' as usize] = mo(NONE, motion::m_bol);
    t[b'^' as usize] = mo(NONE, motion::m_bol);
    t[b'$' as usize] = mo(NONE, motion::m_eol);
    t[b'_' as usize] = mo(NONE, motion::m_line);
    t[b'w' as usize] = mo(NONE, motion::m_word);
    t[b'W' as usize] = mo(NONE, motion::m_word);
    t[b'e' as usize] = mo(NONE, motion::m_word);
    t[b'E' as usize] = mo(NONE, motion::m_word);
    t[b'b' as usize] = mo(NONE, motion::m_back);
    t[b'B' as usize] = mo(NONE, motion::m_back);
    t[b'{' as usize] = mo(NONE, motion::m_para);
    t[b'}' as usize] = mo(NONE, motion::m_para);
    t[b'%' as usize] = mo(NONE, motion::m_match);
    t[b'G' as usize] = mo(KeyFlags::ZERO_COUNT, motion::m_goto);
    t[b'H' as usize] = mo(NONE, motion::m_screen);
    t[b'M' as usize] = mo(NONE, motion::m_screen);
    t[b'L' as usize] = mo(NONE, motion::m_screen);
    t[b'\'' as usize] = mo(KeyFlags::HAS_ARG, motion::m_mark);
    t[b'`' as usize] = mo(KeyFlags::HAS_ARG, motion::m_mark);
    t[b'n' as usize] = mo(NONE, motion::m_search);
    t[b'N' as usize] = mo(NONE, motion::m_search);
    t[b'/' as usize] = mo(NONE, motion::m_sel);

    t[b'y' as usize] = ac(OPERATOR, action::a_yank);
    t[b'd' as usize] = ac(OPERATOR, action::a_del);
    t[b'c' as usize] = ac(OPERATOR, action::a_change);
    t[b'x' as usize] = ac(NONE, action::a_del);
    t[b'p' as usize] = ac(NONE, action::a_put);
    t[b'P' as usize] = ac(NONE, action::a_put);
    t[b'm' as usize] = ac(KeyFlags::HAS_ARG, action::a_mark);
    t[b'i' as usize] = ac(NONE, action::a_ins);
    t[b'I' as usize] = ac(NONE, action::a_ins);
    t[b'a' as usize] = ac(NONE, action::a_ins);
    t[b'A' as usize] = ac(NONE, action::a_ins);
    t[b'o' as usize] = ac(NONE, action::a_ins);
    t[b'O' as usize] = ac(NONE, action::a_ins);
    t[b'u' as usize] = ac(NONE, action::a_undo);
    t[b'.' as usize] = ac(KeyFlags::ZERO_COUNT, action::a_repeat);

    t[CTRL_E] = ac(NONE, action::a_scroll);
    t[CTRL_Y] = ac(NONE, action::a_scroll);
    t[CTRL_U] = ac(KeyFlags::ZERO_COUNT, action::a_scroll);
    t[CTRL_D] = ac(KeyFlags::ZERO_COUNT, action::a_scroll);
    t[CTRL_T] = ac(NONE, action::a_tag);
    t[CTRL_I] = ac(NONE, action::a_run);
    t[CTRL_L] = ac(KeyFlags::HAS_ARG, action::a_edge);
    t[CTRL_W] = ac(NONE, action::a_write);
    t[CTRL_Q] = ac(NONE, action::a_quit);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_and_has_motion_exclusive() {
        for code in 0..128u8 {
            if let Some(e) = entry(code) {
                assert!(
                    !(e.flags.contains(KeyFlags::IS_MOTION)
                        && e.flags.contains(KeyFlags::HAS_MOTION)),
                    "entry {code} is both a motion and an operator",
                );

                match e.bind {
                    Bind::Motion(_) => assert!(e.flags.contains(KeyFlags::IS_MOTION)),
                    Bind::Action(_) => assert!(!e.flags.contains(KeyFlags::IS_MOTION)),
                }
            }
        }
    }

    #[test]
    fn test_unmapped_runes_are_absent() {
        assert!(entry(b'q').is_none());
        assert!(entry(b'"').is_none());
        assert!(entry(0x00).is_none());
    }
}
