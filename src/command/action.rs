//! # Action catalog
//!
//! ## Overview
//!
//! Actions are the commands that do something other than move the cursor:
//! they edit the buffer, change modes, drive the undo log, or ask the [Host]
//! for a side effect. Operators (`y`, `d`, `c`) run their motion as an
//! operand through [yank], which also fills the registers, so every operator
//! leaves the anonymous slot holding exactly the region it touched.
use crate::editing::buffer::{SEL_BEG, SEL_END};
use crate::errors::{EditError, EditResult};
use crate::key::Rune;

use super::{insert, Cmd, Dir, Editor, Host, Mode, Motion, Repeat};

/// Run `mc` as an operand motion and copy its region into the registers.
///
/// The motion's count is multiplied by the main command's count first, so
/// `2d3w` spans six words.
fn yank(ed: &mut Editor, count: u16, mc: &mut Cmd) -> EditResult<Motion> {
    mc.count = mc.count.saturating_mul(count);

    let m = ed.run_motion(true, mc)?;
    let runes = ed.win.eb.slice(m.beg, m.end);
    ed.regs.store(runes, m.linewise);
    Ok(m)
}

/// `y`: yank the region and leave it selected.
pub(crate) fn a_yank(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    mut mc: Cmd,
) -> EditResult {
    let m = yank(ed, c.count, &mut mc)?;

    ed.win.eb.set_mark(SEL_BEG, m.beg);
    ed.win.eb.set_mark(SEL_END, m.end.min(ed.win.eb.len()));
    Ok(())
}

/// `d` and `x`: yank, delete, commit.
pub(crate) fn a_del(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    mut mc: Cmd,
) -> EditResult {
    if c.chr == b'x' {
        mc = Cmd { count: 1, chr: b'l', arg: Rune::NUL };
    }

    let m = yank(ed, c.count, &mut mc)?;
    ed.win.eb.delete(m.beg, m.end);
    ed.win.cu = m.beg;
    ed.win.eb.commit(ed.win.cu);
    Ok(())
}

/// `c`: yank, delete, and switch to insertion mode.
///
/// A line-wise change keeps the first line's indent and the trailing newline.
/// `cw` on a word behaves like `ce`, so the separator after the word
/// survives the change.
pub(crate) fn a_change(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    mut mc: Cmd,
) -> EditResult {
    if matches!(mc.chr, b'w' | b'W') && !ed.win.eb.get(ed.win.cu).is_space() {
        mc.chr = if mc.chr == b'w' { b'e' } else { b'E' };
    }

    let m = yank(ed, c.count, &mut mc)?;

    let mut beg = m.beg;
    let mut end = m.end;
    if m.linewise {
        beg = ed.win.eb.first_nonblank(beg);
        if end > beg && ed.win.eb.get(end - 1) == '\n' {
            end -= 1;
        }
    }

    ed.win.eb.delete(beg, end);
    ed.win.cu = beg;
    ed.enter_insert(1);
    Ok(())
}

/// `p` and `P`: insert a register's contents at the cursor.
pub(crate) fn a_put(
    ed: &mut Editor,
    _host: &mut dyn Host,
    buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    let slot = ed.regs.named(buf);
    let runes = slot.runes.clone();
    let linemode = slot.linemode;

    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let at = if linemode {
        if c.chr == b'P' {
            eb.bol(cu)
        } else {
            (eb.eol(cu) + 1).min(eb.len())
        }
    } else if c.chr == b'p' && eb.get(cu) != '\n' {
        cu + 1
    } else {
        cu
    };

    ed.win.cu = at;
    for _ in 0..c.count {
        ed.win.eb.insert_runes(at, &runes);
    }
    ed.win.eb.commit(at);
    Ok(())
}

/// `m`: set the mark named by the argument rune at the cursor.
pub(crate) fn a_mark(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    ed.win.eb.set_mark(c.arg, ed.win.cu);
    Ok(())
}

/// `i`, `I`, `a`, `A`, `o`, `O`: position the cursor and enter insertion.
pub(crate) fn a_ins(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    let cu = ed.win.cu;
    let eb = &ed.win.eb;

    match c.chr {
        b'a' => {
            if eb.get(cu) != '\n' {
                ed.win.cu = cu + 1;
            }
        },
        b'A' => ed.win.cu = eb.eol(cu),
        b'I' | b'O' => ed.win.cu = eb.first_nonblank(cu),
        b'o' => ed.win.cu = eb.eol(cu),
        _ => {},
    }

    ed.enter_insert(c.count);

    // The opening commands emit their newline themselves; the newline
    // handler's indent copying then builds the new line, and `O` returns to
    // the end of the line it opened above.
    match c.chr {
        b'o' => insert::feed(ed, Rune::from('\n')),
        b'O' => {
            let saved = ed.win.cu;
            insert::feed(ed, Rune::from('\n'));
            ed.win.cu = saved;
        },
        _ => {},
    }
    Ok(())
}

/// `u`: step the undo log and flip the direction for the next `u`.
pub(crate) fn a_undo(
    ed: &mut Editor,
    _host: &mut dyn Host,
    buf: Option<char>,
    c: &Cmd,
    mc: Cmd,
) -> EditResult {
    let cursor = ed.win.eb.undo(ed.rep.redo).ok_or(EditError::UndoExhausted)?;
    ed.win.cu = cursor;
    ed.rep = Repeat { buf, cmd: *c, mot: mc, redo: !ed.rep.redo };
    Ok(())
}

/// `.`: re-dispatch the last repeatable command.
pub(crate) fn a_repeat(
    ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    if ed.rep.cmd.chr == 0 {
        return Err(EditError::NothingToRepeat);
    }
    debug_assert!(ed.rep.cmd.chr != b'.');

    if ed.rep.cmd.chr == b'u' {
        // Repeating an undo keeps walking in the same direction.
        ed.rep.redo = !ed.rep.redo;
    } else {
        debug_assert!(!ed.rep.redo);
    }

    if c.count != 0 {
        ed.rep.cmd.count = c.count;
        ed.rep.mot.count = 1;
    }

    ed.find.locked = true;
    ed.ins.locked = true;

    let (buf, rc, rm) = (ed.rep.buf, ed.rep.cmd, ed.rep.mot);
    let res = ed.execute(host, buf, rc, rm);

    if res.is_ok() && ed.mode == Mode::Insert {
        // Replay the recorded insertion; the opening commands already
        // emitted the leading newline themselves.
        let skip = usize::from(matches!(rc.chr, b'o' | b'O'));
        let log = ed.ins.runes.clone();
        for &r in log.iter().skip(skip) {
            insert::feed(ed, r);
        }
        insert::feed(ed, Rune::ESC);
    }

    ed.find.locked = false;
    ed.ins.locked = false;
    res
}

/// `^E`, `^Y`, `^U`, `^D`: scroll the view without re-centering.
pub(crate) fn a_scroll(
    ed: &mut Editor,
    _host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    let lines: isize = match c.chr {
        0x05 => c.count as isize,
        0x19 => -(c.count as isize),
        _ => {
            if c.count != 0 {
                ed.scount = c.count;
            }
            let n = if ed.scount != 0 {
                ed.scount as usize
            } else {
                (ed.win.visible().len() / 3).max(1)
            };
            if c.chr == 0x15 {
                -(n as isize)
            } else {
                n as isize
            }
        },
    };

    ed.win.scroll(lines);
    ed.scrolling = true;
    Ok(())
}

/// `^T`: toggle the tag window.
pub(crate) fn a_tag(
    _ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    _c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    host.tag_toggle();
    Ok(())
}

/// `^I`: run the current line as an external command.
pub(crate) fn a_run(
    ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    _c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let line: String = eb
        .slice(eb.bol(cu), eb.eol(cu))
        .iter()
        .filter_map(Rune::to_char)
        .collect();

    host.run_line(&line);
    Ok(())
}

/// `^L` plus `h`/`j`/`k`/`l`: move focus to a neighboring window.
pub(crate) fn a_edge(
    _ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    let dir = match c.arg.as_ascii() {
        Some(b'h') => Dir::Left,
        Some(b'j') => Dir::Down,
        Some(b'k') => Dir::Up,
        Some(b'l') => Dir::Right,
        _ => return Err(EditError::InvalidCommand),
    };

    host.edge(dir);
    Ok(())
}

/// `^W`: persist the buffer.
pub(crate) fn a_write(
    ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    _c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    host.persist(&ed.win);
    Ok(())
}

/// `^Q`: request a graceful exit.
pub(crate) fn a_quit(
    _ed: &mut Editor,
    host: &mut dyn Host,
    _buf: Option<char>,
    _c: &Cmd,
    _mc: Cmd,
) -> EditResult {
    host.quit();
    Ok(())
}
