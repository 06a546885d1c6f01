//! # Insertion interpreter
//!
//! ## Overview
//!
//! While in insertion mode every rune flows through [feed]. Typed runes are
//! recorded in a bounded log so that the whole insertion can be replayed —
//! by a count (`3i` types the text three times) or by the repeat command.
//! The log is locked during replays, which makes re-feeding its own contents
//! through [feed] safe.
//!
//! Three runes are special: Backspace removes the rune before the cursor,
//! Escape finishes the insertion, and newline re-creates the previous line's
//! leading blanks so indentation carries over.
use crate::key::Rune;

use super::{Editor, Mode};

/// Capacity of the insertion log. Overflow clears and locks the log, which
/// silently disables replay for that insertion.
pub(crate) const LOG_MAX: usize = 512;

/// The recorded runes of the current insertion.
#[derive(Default)]
pub(crate) struct InsertLog {
    pub runes: Vec<Rune>,
    pub locked: bool,
}

/// Interpret one rune of insertion-mode input.
pub(crate) fn feed(ed: &mut Editor, r: Rune) {
    if !ed.ins.locked && r != Rune::ESC {
        ed.ins.runes.push(r);
        if ed.ins.runes.len() >= LOG_MAX {
            ed.ins.runes.clear();
            ed.ins.locked = true;
        }
    }

    match r {
        Rune::ESC => esc(ed),
        Rune::BACKSPACE => {
            let cu = ed.win.cu;
            if cu > 0 {
                ed.win.eb.delete(cu - 1, cu);
                ed.win.cu = cu - 1;
            }
        },
        r if r == '\n' => newline(ed),
        r => {
            let cu = ed.win.cu;
            ed.win.eb.insert(cu, r);
            ed.win.cu = cu + 1;
        },
    }
}

fn esc(ed: &mut Editor) {
    ed.ins.locked = true;
    for _ in 1..ed.cnti {
        let log = ed.ins.runes.clone();
        for &r in &log {
            feed(ed, r);
        }
    }
    ed.ins.locked = false;

    // Rest on the last typed rune, unless that would cross a line boundary.
    let cu = ed.win.cu;
    if ed.win.eb.get(cu.wrapping_sub(1)) != '\n' {
        ed.win.cu = cu - 1;
    }

    let cu = ed.win.cu;
    ed.win.eb.commit(cu);
    ed.mode = Mode::Command;
}

fn newline(ed: &mut Editor) {
    let at = ed.win.cu;
    let bol = ed.win.eb.bol(at);

    ed.win.eb.insert(at, Rune::from('\n'));
    ed.win.cu = at + 1;

    // Copy the previous line's leading blanks onto the new line.
    let mut i = bol;
    while i < at {
        let r = ed.win.eb.get(i);
        if !r.is_blank() {
            break;
        }
        let cu = ed.win.cu;
        ed.win.eb.insert(cu, r);
        ed.win.cu = cu + 1;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Host, NullHost};
    use crate::editing::buffer::Buffer;
    use crate::editing::window::Window;

    fn ed(text: &str) -> Editor {
        Editor::new(Window::new(Buffer::from(text), 8))
    }

    fn keys(e: &mut Editor, host: &mut dyn Host, s: &str) {
        for ch in s.chars() {
            let r = match ch {
                '\x1b' => Rune::ESC,
                '\x08' => Rune::BACKSPACE,
                _ => Rune::from(ch),
            };
            e.feed(r, host);
        }
    }

    #[test]
    fn test_insert_and_escape_cursor() {
        let mut e = ed("x\n");
        let mut h = NullHost;

        keys(&mut e, &mut h, "iab\x1b");

        assert_eq!(e.win.eb.to_string(), "abx\n");
        assert_eq!(e.win.cu, 1);
        assert_eq!(e.mode(), Mode::Command);
    }

    #[test]
    fn test_counted_insert_replays() {
        let mut e = ed("x\n");
        let mut h = NullHost;

        keys(&mut e, &mut h, "3a!\x1b");

        assert_eq!(e.win.eb.to_string(), "x!!!\n");
        assert_eq!(e.win.cu, 3);
    }

    #[test]
    fn test_backspace() {
        let mut e = ed("");
        let mut h = NullHost;

        keys(&mut e, &mut h, "iab\x08c\x1b");

        assert_eq!(e.win.eb.to_string(), "ac");
    }

    #[test]
    fn test_newline_preserves_indent() {
        let mut e = ed("    x\n");
        let mut h = NullHost;

        keys(&mut e, &mut h, "A\n");

        assert_eq!(e.win.eb.to_string(), "    x\n    \n");
        assert_eq!(e.win.cu, 10);

        keys(&mut e, &mut h, "\x1b");
        assert_eq!(e.win.cu, 9);
    }

    #[test]
    fn test_open_below_and_above() {
        let mut e = ed("  mid\n");
        let mut h = NullHost;
        e.win.cu = 3;

        keys(&mut e, &mut h, "oy\x1b");
        assert_eq!(e.win.eb.to_string(), "  mid\n  y\n");

        let mut e = ed("  mid\n");
        e.win.cu = 3;
        keys(&mut e, &mut h, "OY\x1b");
        assert_eq!(e.win.eb.to_string(), "  Y\n  mid\n");
    }

    #[test]
    fn test_escape_commits_one_undo_record() {
        let mut e = ed("x\n");
        let mut h = NullHost;

        keys(&mut e, &mut h, "iabc\x1b");
        assert_eq!(e.win.eb.to_string(), "abcx\n");

        keys(&mut e, &mut h, "u");
        assert_eq!(e.win.eb.to_string(), "x\n");
        assert_eq!(e.win.cu, 0);
    }

    #[test]
    fn test_log_overflow_locks_silently() {
        let mut e = ed("");
        let mut h = NullHost;

        keys(&mut e, &mut h, "i");
        for _ in 0..LOG_MAX + 1 {
            e.feed(Rune::from('z'), &mut h);
        }
        keys(&mut e, &mut h, "\x1b");

        assert_eq!(e.win.eb.len(), LOG_MAX + 1);
        assert!(e.ins.runes.is_empty());

        // Repeat has nothing to replay, so only the cursor settles.
        keys(&mut e, &mut h, ".");
        assert_eq!(e.win.eb.len(), LOG_MAX + 1);
    }
}
