//! # Command language
//!
//! ## Overview
//!
//! This module implements the command mode of a modal, vi-style editor: a
//! persistent state machine that consumes one [Rune] per call and recognizes
//! the four-part command syntax
//!
//! ```text
//! ["<register>] [count] <command> [count] [<motion>] [<argument>]
//! ```
//!
//! On a complete parse the dispatcher runs the command against the focused
//! [Window]: standalone motions move the cursor, operators (`d`, `c`, `y`)
//! consume their motion's region, and everything else acts directly. Side
//! effects that belong to the surrounding application — diagnostics, window
//! layout, running a line as a command, persisting, quitting — go through the
//! [Host] trait.
//!
//! All state lives in an [Editor] value; nothing here is global. The editor
//! is strictly single-threaded: one rune is consumed per [Editor::feed] call,
//! which runs to completion (including dispatch and any insertion replay)
//! before returning.
use crate::editing::registers::Registers;
use crate::editing::window::Window;
use crate::errors::{EditError, EditResult};
use crate::key::Rune;

use self::insert::InsertLog;
use self::keys::{Bind, KeyFlags};

mod action;
mod insert;
mod keys;
mod motion;

/// The two input modes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Runes are parsed as commands.
    #[default]
    Command,

    /// Runes are recorded and inserted into the buffer.
    Insert,
}

/// A direction for moving focus between windows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dir {
    /// Towards the window on the left.
    Left,

    /// Towards the window below.
    Down,

    /// Towards the window above.
    Up,

    /// Towards the window on the right.
    Right,
}

/// Side effects the command core delegates to its embedding application.
///
/// Every method has a no-op default so hosts only implement what they render.
pub trait Host {
    /// Show a one-line diagnostic to the user.
    fn error(&mut self, _msg: &str) {}

    /// Toggle the tag window.
    fn tag_toggle(&mut self) {}

    /// Move focus to the neighboring window in `dir`.
    fn edge(&mut self, _dir: Dir) {}

    /// Run `line` as an external command.
    fn run_line(&mut self, _line: &str) {}

    /// Persist the window's buffer.
    fn persist(&mut self, _win: &Window) {}

    /// Request a graceful exit.
    fn quit(&mut self) {}
}

/// A [Host] that ignores every side effect.
pub struct NullHost;

impl Host for NullHost {}

/// One parsed command fragment: either the main command or its motion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cmd {
    /// The count prefix; 0 means "unspecified".
    pub count: u16,

    /// The ASCII command rune.
    pub chr: u8,

    /// The argument rune for `HAS_ARG` commands (find target, mark name).
    pub arg: Rune,
}

/// The region produced by a motion.
///
/// `beg` and `end` are half-open rune offsets; after a successful operand
/// motion `beg <= end`. A standalone cursor move only uses `end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Motion {
    /// Start of the region.
    pub beg: usize,

    /// End of the region, exclusive.
    pub end: usize,

    /// Whether the region covers whole lines including trailing newlines.
    pub linewise: bool,
}

impl Motion {
    pub(crate) fn at(cursor: usize) -> Self {
        Motion { beg: cursor, end: 0, linewise: false }
    }

    pub(crate) fn order(&mut self) {
        if self.end < self.beg {
            std::mem::swap(&mut self.beg, &mut self.end);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    BufferDQuote,
    BufferName,
    CmdChar,
    CmdDouble,
    CmdArg,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Main,
    Motion,
}

/// The last `t`/`T`/`f`/`F` target, replayed by `;` and `,`.
#[derive(Default)]
pub(crate) struct Find {
    pub locked: bool,
    pub chr: u8,
    pub arg: Rune,
}

/// The last repeatable command, replayed by `.`.
#[derive(Default)]
pub(crate) struct Repeat {
    pub buf: Option<char>,
    pub cmd: Cmd,
    pub mot: Cmd,
    pub redo: bool,
}

/// The command core: parser, dispatcher, and every piece of modal state.
pub struct Editor {
    /// The focused window the commands act on.
    pub win: Window,

    pub(crate) regs: Registers,
    pub(crate) mode: Mode,

    phase: Phase,
    buf: Option<char>,
    cur: Cmd,
    mot: Cmd,
    slot: Slot,

    pub(crate) ins: InsertLog,
    pub(crate) cnti: u16,
    pub(crate) find: Find,
    pub(crate) rep: Repeat,
    pub(crate) scrolling: bool,
    pub(crate) scount: u16,
}

impl Editor {
    /// Create an editor over `win`, starting in command mode.
    pub fn new(win: Window) -> Self {
        Editor {
            win,
            regs: Registers::default(),
            mode: Mode::Command,
            phase: Phase::BufferDQuote,
            buf: None,
            cur: Cmd::default(),
            mot: Cmd::default(),
            slot: Slot::Main,
            ins: InsertLog::default(),
            cnti: 0,
            find: Find::default(),
            rep: Repeat::default(),
            scrolling: false,
            scount: 0,
        }
    }

    /// The current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The yank registers.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Whether the last command scrolled the view, in which case the host
    /// should not re-center it on the cursor.
    pub fn scrolled(&self) -> bool {
        self.scrolling
    }

    /// Consume one rune of input.
    ///
    /// In insertion mode the rune goes to the insertion interpreter; in
    /// command mode it advances the parser, dispatching when a command
    /// completes. Parse errors emit one diagnostic through `host` and reset
    /// the parser; motion and action failures are silent.
    pub fn feed(&mut self, r: Rune, host: &mut dyn Host) {
        if self.mode == Mode::Insert {
            insert::feed(self, r);
            return;
        }

        if r == Rune::ESC {
            self.reset();
            return;
        }

        loop {
            match self.phase {
                Phase::BufferDQuote => {
                    if r == '"' {
                        self.phase = Phase::BufferName;
                        return;
                    }
                    // Re-enter with the same rune as the command character.
                    self.phase = Phase::CmdChar;
                    continue;
                },
                Phase::BufferName => {
                    match r.to_char() {
                        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {
                            self.buf = Some(c);
                            self.phase = Phase::CmdChar;
                        },
                        _ => self.fail(host),
                    }
                    return;
                },
                Phase::CmdChar => {
                    if let Some(d) = r.ascii_digit() {
                        if d != 0 || self.frag().count != 0 {
                            let t = self.frag_mut();
                            t.count = t.count.saturating_mul(10).saturating_add(d);
                            return;
                        }
                    }

                    let entry = match r.as_ascii().and_then(keys::entry) {
                        Some(e) => e,
                        None => {
                            self.fail(host);
                            return;
                        },
                    };
                    let flags = entry.flags;

                    let code = r.as_ascii().unwrap_or(0);
                    let t = self.frag_mut();
                    if t.count == 0 && !flags.contains(KeyFlags::ZERO_COUNT) {
                        t.count = 1;
                    }
                    t.chr = code;

                    if flags.contains(KeyFlags::IS_DOUBLE) {
                        if self.slot == Slot::Motion && code == self.cur.chr {
                            // The pending operator's own rune in the motion
                            // slot is the doubled, whole-line form, keeping
                            // any count typed in between: d3d is 3dd.
                            self.mot.chr = b'_';
                            self.dispatch_parsed(host);
                        } else {
                            self.phase = Phase::CmdDouble;
                        }
                    } else if flags.contains(KeyFlags::HAS_ARG) {
                        self.phase = Phase::CmdArg;
                    } else {
                        self.finish(host);
                    }
                    return;
                },
                Phase::CmdDouble => {
                    if r.as_ascii() == Some(self.frag().chr) {
                        match self.slot {
                            Slot::Main => {
                                // The doubled operator selects whole lines.
                                self.mot = Cmd { count: 1, chr: b'_', arg: Rune::NUL };
                                self.dispatch_parsed(host);
                            },
                            // A doubled rune here never names the pending
                            // operator; that form resolves as soon as it is
                            // typed.
                            Slot::Motion => self.fail(host),
                        }
                        return;
                    }

                    if self.slot == Slot::Main {
                        // Not doubled after all: the rune begins the motion.
                        self.slot = Slot::Motion;
                        self.phase = Phase::CmdChar;
                        continue;
                    }

                    self.fail(host);
                    return;
                },
                Phase::CmdArg => {
                    self.frag_mut().arg = r;
                    self.finish(host);
                    return;
                },
            }
        }
    }

    fn frag(&self) -> &Cmd {
        match self.slot {
            Slot::Main => &self.cur,
            Slot::Motion => &self.mot,
        }
    }

    fn frag_mut(&mut self) -> &mut Cmd {
        match self.slot {
            Slot::Main => &mut self.cur,
            Slot::Motion => &mut self.mot,
        }
    }

    fn finish(&mut self, host: &mut dyn Host) {
        let flags = match keys::entry(self.frag().chr) {
            Some(e) => e.flags,
            None => {
                self.fail(host);
                return;
            },
        };

        if self.slot == Slot::Motion && !flags.contains(KeyFlags::IS_MOTION) {
            self.fail(host);
            return;
        }

        if flags.contains(KeyFlags::HAS_MOTION) && self.slot == Slot::Main {
            self.slot = Slot::Motion;
            self.phase = Phase::CmdChar;
            return;
        }

        self.dispatch_parsed(host);
    }

    fn dispatch_parsed(&mut self, host: &mut dyn Host) {
        let (buf, c, mc) = (self.buf, self.cur, self.mot);
        self.reset();

        tracing::trace!(chr = %char::from(c.chr), count = c.count, "dispatching command");
        let _ = self.execute(host, buf, c, mc);
        self.win.reframe();
    }

    /// Run a fully parsed command. Used by dispatch and by `.`.
    pub(crate) fn execute(
        &mut self,
        host: &mut dyn Host,
        buf: Option<char>,
        c: Cmd,
        mc: Cmd,
    ) -> EditResult {
        let entry = keys::entry(c.chr).ok_or(EditError::InvalidCommand)?;

        self.scrolling = false;
        self.win.eb.prepare(self.win.cu);

        match entry.bind {
            Bind::Motion(_) => {
                let m = self.run_motion(false, &c)?;
                self.win.cu = m.end;
                Ok(())
            },
            Bind::Action(f) => {
                f(self, host, buf, &c, mc)?;

                // Control-character commands must not be repeated, and `u`
                // and `.` maintain the repeat memory themselves.
                if !c.chr.is_ascii_control() && c.chr != b'.' && c.chr != b'u' {
                    self.rep = Repeat { buf, cmd: c, mot: mc, redo: false };
                }
                Ok(())
            },
        }
    }

    /// Run `mc` as a motion starting at the cursor.
    pub(crate) fn run_motion(&mut self, as_operand: bool, mc: &Cmd) -> EditResult<Motion> {
        let entry = keys::entry(mc.chr).ok_or(EditError::InvalidCommand)?;
        let Bind::Motion(f) = entry.bind else {
            return Err(EditError::InvalidCommand);
        };

        let mut m = f(self, as_operand, mc)?;
        if as_operand {
            m.order();
        }
        Ok(m)
    }

    /// Switch to insertion mode, starting a fresh recording unless the log
    /// is locked by a replay in progress.
    pub(crate) fn enter_insert(&mut self, count: u16) {
        if !self.ins.locked {
            self.ins.runes.clear();
        }
        self.cnti = count;
        self.mode = Mode::Insert;
    }

    fn fail(&mut self, host: &mut dyn Host) {
        tracing::debug!("rejected command input");
        host.error("! invalid command");
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = Phase::BufferDQuote;
        self.buf = None;
        self.cur = Cmd::default();
        self.mot = Cmd::default();
        self.slot = Slot::Main;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::buffer::{Buffer, SEL_BEG, SEL_END};

    #[derive(Default)]
    struct Recorder {
        errors: Vec<String>,
        lines: Vec<String>,
        edges: Vec<Dir>,
        tags: usize,
        saved: usize,
        quit: bool,
    }

    impl Host for Recorder {
        fn error(&mut self, msg: &str) {
            self.errors.push(msg.to_string());
        }

        fn tag_toggle(&mut self) {
            self.tags += 1;
        }

        fn edge(&mut self, dir: Dir) {
            self.edges.push(dir);
        }

        fn run_line(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }

        fn persist(&mut self, _win: &Window) {
            self.saved += 1;
        }

        fn quit(&mut self) {
            self.quit = true;
        }
    }

    fn ed(text: &str) -> (Editor, Recorder) {
        (Editor::new(Window::new(Buffer::from(text), 8)), Recorder::default())
    }

    fn feed(e: &mut Editor, host: &mut Recorder, keys: &str) {
        for ch in keys.chars() {
            let r = match ch {
                '\x1b' => Rune::ESC,
                '\x08' => Rune::BACKSPACE,
                _ => Rune::from(ch),
            };
            e.feed(r, host);
        }
    }

    fn text(e: &Editor) -> String {
        e.win.eb.to_string()
    }

    fn anon(e: &Editor) -> String {
        e.registers().anon().runes.iter().filter_map(|r| r.to_char()).collect()
    }

    #[test]
    fn test_register_prefix_and_word_delete() {
        let (mut e, mut h) = ed("hello\n");

        feed(&mut e, &mut h, "\"adw");

        assert_eq!(text(&e), "\n");
        assert_eq!(e.win.cu, 0);
        assert_eq!(anon(&e), "hello");
        assert!(!e.registers().anon().linemode);
        assert!(h.errors.is_empty());
    }

    #[test]
    fn test_change_word_keeps_following_space() {
        let (mut e, mut h) = ed("foo bar baz\n");
        e.win.cu = 4;

        feed(&mut e, &mut h, "cwQUUX\x1b");

        assert_eq!(text(&e), "foo QUUX baz\n");
        assert_eq!(e.mode(), Mode::Command);
        assert_eq!(e.win.cu, 7);
    }

    #[test]
    fn test_delete_paragraph_is_linewise() {
        let (mut e, mut h) = ed("a\n\nb\n\nc\n");

        feed(&mut e, &mut h, "d}");

        assert_eq!(text(&e), "\nb\n\nc\n");
        let slot = e.registers().numbered(1);
        assert!(slot.linemode);
        assert_eq!(slot.runes.iter().filter_map(|r| r.to_char()).collect::<String>(), "a\n");
    }

    #[test]
    fn test_repeat_with_count_override() {
        let (mut e, mut h) = ed("foo bar baz qux quux\n");

        feed(&mut e, &mut h, "dw");
        assert_eq!(text(&e), "bar baz qux quux\n");

        feed(&mut e, &mut h, "3.");
        assert_eq!(text(&e), "quux\n");
    }

    #[test]
    fn test_bracket_match_delete_linewise() {
        let (mut e, mut h) = ed("{\n  body\n}\n");

        feed(&mut e, &mut h, "d%");

        assert_eq!(text(&e), "");
        assert!(e.registers().numbered(1).linemode);
    }

    #[test]
    fn test_doubled_operators() {
        let (mut e, mut h) = ed("a\nb\nc\nd\n");

        feed(&mut e, &mut h, "3dd");
        assert_eq!(text(&e), "d\n");

        let slot = e.registers().numbered(1);
        assert!(slot.linemode);
        assert_eq!(slot.runes.len(), 6);

        feed(&mut e, &mut h, "u");
        assert_eq!(text(&e), "a\nb\nc\nd\n");

        // d3d spells the same command.
        feed(&mut e, &mut h, "d3d");
        assert_eq!(text(&e), "d\n");
    }

    #[test]
    fn test_doubled_change_keeps_indent() {
        let (mut e, mut h) = ed("  alpha\nbeta\n");

        feed(&mut e, &mut h, "ccX\x1b");

        assert_eq!(text(&e), "  X\nbeta\n");
    }

    #[test]
    fn test_undo_alternates() {
        let (mut e, mut h) = ed("abc\n");

        feed(&mut e, &mut h, "x");
        assert_eq!(text(&e), "bc\n");

        feed(&mut e, &mut h, "u");
        assert_eq!(text(&e), "abc\n");

        feed(&mut e, &mut h, "u");
        assert_eq!(text(&e), "bc\n");
    }

    #[test]
    fn test_undo_then_repeat_walks_history() {
        let (mut e, mut h) = ed("abc\n");

        feed(&mut e, &mut h, "xxx");
        assert_eq!(text(&e), "\n");

        feed(&mut e, &mut h, "u");
        assert_eq!(text(&e), "c\n");

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "bc\n");

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "abc\n");
    }

    #[test]
    fn test_delete_then_undo_restores_cursor() {
        let (mut e, mut h) = ed("foo bar\n");
        e.win.cu = 4;

        feed(&mut e, &mut h, "dw");
        assert_eq!(text(&e), "foo \n");
        assert_eq!(e.win.cu, 4);

        feed(&mut e, &mut h, "u");
        assert_eq!(text(&e), "foo bar\n");
        assert_eq!(e.win.cu, 4);
    }

    #[test]
    fn test_named_put_of_yanked_line_leaves_buffer_alone() {
        let (mut e, mut h) = ed("one\ntwo\n");

        feed(&mut e, &mut h, "\"ayy");
        assert_eq!(anon(&e), "one\n");

        // Letter registers hold nothing, so the put inserts nothing.
        feed(&mut e, &mut h, "\"ap");
        assert_eq!(text(&e), "one\ntwo\n");
    }

    #[test]
    fn test_numbered_ring_put() {
        let (mut e, mut h) = ed("a\nb\nc\n");

        feed(&mut e, &mut h, "dd");
        feed(&mut e, &mut h, "dd");
        assert_eq!(text(&e), "c\n");

        // Slot 2 is the older of the two deleted lines.
        feed(&mut e, &mut h, "\"2p");
        assert_eq!(text(&e), "c\na\n");
        assert_eq!(e.win.cu, 2);

        feed(&mut e, &mut h, "\"1P");
        assert_eq!(text(&e), "c\nb\na\n");
    }

    #[test]
    fn test_charwise_put_advances_past_cursor() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, "ylp");
        assert_eq!(text(&e), "aab\n");

        feed(&mut e, &mut h, "P");
        assert_eq!(text(&e), "aaab\n");
    }

    #[test]
    fn test_yank_sets_selection_marks() {
        let (mut e, mut h) = ed("hello\n");

        feed(&mut e, &mut h, "y2l");

        assert_eq!(e.win.eb.get_mark(SEL_BEG), Some(0));
        assert_eq!(e.win.eb.get_mark(SEL_END), Some(2));
        assert_eq!(anon(&e), "he");

        // `/` consumes the selection as an operand region.
        feed(&mut e, &mut h, "d/");
        assert_eq!(text(&e), "llo\n");
    }

    #[test]
    fn test_search_motion_uses_anonymous_yank() {
        let (mut e, mut h) = ed("foo bar foo\n");

        feed(&mut e, &mut h, "y2l");
        assert_eq!(anon(&e), "fo");

        feed(&mut e, &mut h, "d/");
        feed(&mut e, &mut h, "u");

        // With the selection cleared to an empty span by the undo, `n`
        // falls back to the anonymous slot.
        e.win.cu = 1;
        feed(&mut e, &mut h, "n");
        assert_eq!(e.win.cu, 8);

        feed(&mut e, &mut h, "N");
        assert_eq!(e.win.cu, 0);
    }

    #[test]
    fn test_parse_error_resets() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, "q");
        assert_eq!(h.errors, vec!["! invalid command"]);

        feed(&mut e, &mut h, "x");
        assert_eq!(text(&e), "b\n");
    }

    #[test]
    fn test_escape_resets_partial_command() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, "\"a3");
        feed(&mut e, &mut h, "\x1bx");

        assert_eq!(text(&e), "b\n");
        assert!(h.errors.is_empty());
    }

    #[test]
    fn test_operator_requires_motion() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, "dp");
        assert_eq!(h.errors.len(), 1);
        assert_eq!(text(&e), "ab\n");
    }

    #[test]
    fn test_failed_motion_leaves_cursor() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, "k");
        assert_eq!(e.win.cu, 0);
        assert!(h.errors.is_empty());

        // A failed motion fails the whole operator without touching the
        // buffer.
        feed(&mut e, &mut h, "dk");
        assert_eq!(text(&e), "ab\n");
    }

    #[test]
    fn test_count_zero_only_for_zero_count_entries() {
        let (mut e, mut h) = ed("a\nb\nc\n");

        // Bare G goes to limbo; 1G goes to the first line.
        feed(&mut e, &mut h, "G");
        assert_eq!(e.win.cu, 6);

        feed(&mut e, &mut h, "1G");
        assert_eq!(e.win.cu, 0);
    }

    #[test]
    fn test_mark_set_and_jump() {
        let (mut e, mut h) = ed("one\n  two\n");

        feed(&mut e, &mut h, "ma");
        e.win.cu = 6;

        feed(&mut e, &mut h, "`a");
        assert_eq!(e.win.cu, 0);

        // 'x on an unset mark fails silently.
        feed(&mut e, &mut h, "'x");
        assert_eq!(e.win.cu, 0);
        assert!(h.errors.is_empty());
    }

    #[test]
    fn test_scroll_sets_flag_and_sticks() {
        let (mut e, mut h) = ed("a\nb\nc\nd\ne\nf\ng\nh\ni\nj\nk\nl\n");

        e.feed(Rune(0x05), &mut h);
        assert!(e.scrolled());
        assert_eq!(e.win.visible()[0], 2);

        feed(&mut e, &mut h, "j");
        assert!(!e.scrolled());

        // ^D remembers an explicit count.
        e.feed(Rune::from('2'), &mut h);
        e.feed(Rune(0x04), &mut h);
        assert_eq!(e.win.visible()[0], 6);

        e.feed(Rune(0x04), &mut h);
        assert_eq!(e.win.visible()[0], 10);

        e.feed(Rune(0x15), &mut h);
        assert_eq!(e.win.visible()[0], 6);
    }

    #[test]
    fn test_host_side_effects() {
        let (mut e, mut h) = ed("make test\n");

        e.feed(Rune(0x14), &mut h);
        assert_eq!(h.tags, 1);

        e.feed(Rune(0x09), &mut h);
        assert_eq!(h.lines, vec!["make test"]);

        e.feed(Rune(0x0c), &mut h);
        feed(&mut e, &mut h, "j");
        assert_eq!(h.edges, vec![Dir::Down]);

        e.feed(Rune(0x17), &mut h);
        assert_eq!(h.saved, 1);

        e.feed(Rune(0x11), &mut h);
        assert!(h.quit);
    }

    #[test]
    fn test_control_commands_are_not_repeatable() {
        let (mut e, mut h) = ed("one two\n");

        feed(&mut e, &mut h, "dw");
        e.feed(Rune(0x14), &mut h);

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "\n");
        assert_eq!(h.tags, 1);
    }

    #[test]
    fn test_repeat_of_insertion_replays_runes() {
        let (mut e, mut h) = ed("x\n");

        feed(&mut e, &mut h, "iab\x1b");
        assert_eq!(text(&e), "abx\n");
        assert_eq!(e.win.cu, 1);

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "aabbx\n");
    }

    #[test]
    fn test_repeat_of_open_skips_leading_newline() {
        let (mut e, mut h) = ed("top\n");

        feed(&mut e, &mut h, "oZZ\x1b");
        assert_eq!(text(&e), "top\nZZ\n");

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "top\nZZ\nZZ\n");
    }

    #[test]
    fn test_repeat_never_stores_itself() {
        let (mut e, mut h) = ed("abcd\n");

        feed(&mut e, &mut h, "x.");
        assert_eq!(text(&e), "cd\n");

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "d\n");
    }

    #[test]
    fn test_repeat_with_nothing_recorded_fails() {
        let (mut e, mut h) = ed("ab\n");

        feed(&mut e, &mut h, ".");
        assert_eq!(text(&e), "ab\n");
        assert!(h.errors.is_empty());
    }
}
