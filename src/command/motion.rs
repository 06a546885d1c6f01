//! # Motion catalog
//!
//! ## Overview
//!
//! Every motion maps `(as_operand, parsed command, cursor)` to a region, or
//! fails. Standalone motions only care about where the cursor ends up;
//! operand motions produce the half-open region their operator consumes, and
//! several of them widen that region to whole lines.
//!
//! Most scans terminate on limbo: past the end of the text the buffer reads
//! as an endless run of `'\n'`, so a line scan that runs off the end stops at
//! a newline like any other.
use crate::editing::buffer::{Buffer, SEL_BEG, SEL_END};
use crate::editing::search;
use crate::errors::{EditError, EditResult};
use crate::key::Rune;

use super::{Cmd, Editor, Motion};

/// Widen an ordered region to whole lines, including trailing newlines.
fn linewise(eb: &Buffer, m: &mut Motion) {
    m.linewise = true;
    m.beg = eb.bol(m.beg);
    m.end = (eb.eol(m.end) + 1).min(eb.len());
}

/// `h` and `l`: horizontal movement within the line.
pub(crate) fn m_hl(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let count = c.count as usize;
    let mut m = Motion::at(cu);

    if c.chr == b'h' {
        let col = eb.col_of(cu);
        if col == 0 {
            return Err(EditError::MotionFailed);
        }
        m.end = cu - count.min(col);
    } else {
        let mut end = cu;
        for _ in 0..count {
            if eb.get(end) == '\n' {
                return Err(EditError::MotionFailed);
            }
            end += 1;
        }
        if !op && eb.get(end) == '\n' {
            return Err(EditError::MotionFailed);
        }
        m.end = end;
    }

    Ok(m)
}

/// `j` and `k`: vertical movement, keeping the column.
pub(crate) fn m_jk(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let count = c.count as usize;
    let ln = eb.line_of(cu);

    let target = if c.chr == b'j' {
        let t = ln + count;
        if t > eb.last_line() {
            return Err(EditError::MotionFailed);
        }
        t
    } else {
        if count > ln {
            return Err(EditError::MotionFailed);
        }
        ln - count
    };

    let mut m = Motion::at(cu);
    m.end = eb.offset_at(target, eb.col_of(cu));
    if op {
        m.order();
        linewise(eb, &mut m);
    }
    Ok(m)
}

/// `t`, `T`, `f`, `F`: single-rune search within the current line.
pub(crate) fn m_find(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let cu = ed.win.cu;
    let forward = matches!(c.chr, b't' | b'f');
    let upto = matches!(c.chr, b't' | b'T');

    let mut i = cu;
    for _ in 0..c.count {
        loop {
            i = if forward { i + 1 } else { i.wrapping_sub(1) };
            let r = ed.win.eb.get(i);
            if r == '\n' {
                return Err(EditError::MotionFailed);
            }
            if r == c.arg {
                break;
            }
        }
    }

    let mut end = match (upto, forward) {
        (true, true) => i - 1,
        (true, false) => i + 1,
        (false, _) => i,
    };
    if op && forward {
        end += 1;
    }

    if !ed.find.locked {
        ed.find.chr = c.chr;
        ed.find.arg = c.arg;
    }

    let mut m = Motion::at(cu);
    m.end = end;
    Ok(m)
}

/// `;` and `,`: replay the last rune search, `,` with the direction flipped.
pub(crate) fn m_findrep(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    if ed.find.chr == 0 {
        return Err(EditError::NoPreviousFind);
    }

    let mut replay = Cmd { count: c.count, chr: ed.find.chr, arg: ed.find.arg };
    if c.chr == b',' {
        replay.chr ^= 0x20;
    }

    ed.find.locked = true;
    let res = m_find(ed, op, &replay);
    ed.find.locked = false;
    res
}

/// `0` and `^`: beginning of line and first non-blank.
pub(crate) fn m_bol(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;

    let dest = if c.chr == b'0' {
        eb.bol(cu)
    } else {
        eb.first_nonblank(cu)
    };

    if !op && dest == cu {
        return Err(EditError::MotionFailed);
    }

    let mut m = Motion::at(cu);
    m.end = dest;
    Ok(m)
}

/// `$`: end of line, or of the count-th following line.
pub(crate) fn m_eol(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let count = c.count as usize;

    let target = eb.line_of(cu) + count - 1;
    if target > eb.last_line() {
        return Err(EditError::MotionFailed);
    }

    let mut end = eb.eol(eb.line_start(target));
    if op || eb.get(cu) == '\n' {
        end = (end + 1).min(eb.len());
    }

    let mut m = Motion::at(cu);
    m.end = end;
    if count > 1 && cu <= eb.first_nonblank(cu) {
        m.linewise = true;
        m.beg = eb.bol(m.beg);
    }
    Ok(m)
}

/// `_`: the current line, or count whole lines.
pub(crate) fn m_line(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;

    let target = eb.line_of(cu) + c.count as usize - 1;
    if target > eb.last_line() {
        return Err(EditError::MotionFailed);
    }

    let mut m = Motion::at(cu);
    if op {
        m.linewise = true;
        m.beg = eb.bol(cu);
        m.end = (eb.eol(eb.line_start(target)) + 1).min(eb.len());
    } else {
        m.end = eb.first_nonblank(eb.line_start(target));
    }
    Ok(m)
}

fn predicate(chr: u8) -> fn(Rune) -> bool {
    if chr.is_ascii_lowercase() {
        |r| r.is_word()
    } else {
        |r| !r.is_space()
    }
}

/// `w`, `W`, `e`, `E`: forward to the next word start or word end.
pub(crate) fn m_word(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let count = c.count as usize;
    let len = eb.len();
    let pred = predicate(c.chr);

    let mut m = Motion::at(cu);
    let mut i = cu;

    if matches!(c.chr, b'e' | b'E') {
        for _ in 0..count {
            i += 1;
            while !pred(eb.get(i)) {
                if i >= len {
                    return Err(EditError::MotionFailed);
                }
                i += 1;
            }
            while pred(eb.get(i + 1)) {
                i += 1;
            }
        }
        m.end = if op { i + 1 } else { i };
    } else {
        for k in 0..count {
            let last = k + 1 == count;
            while pred(eb.get(i)) {
                i += 1;
            }
            loop {
                let r = eb.get(i);
                if pred(r) {
                    break;
                }
                // An operator's final iteration stops short of the line's
                // trailing newline.
                if op && last && r == '\n' {
                    m.end = i;
                    return Ok(m);
                }
                if i >= len {
                    return Err(EditError::MotionFailed);
                }
                i += 1;
            }
        }
        m.end = i;
    }

    Ok(m)
}

/// `b` and `B`: backward to the previous word start.
pub(crate) fn m_back(ed: &mut Editor, _op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let pred = predicate(c.chr);

    let mut i = cu;
    for _ in 0..c.count {
        loop {
            if i == 0 {
                return Err(EditError::MotionFailed);
            }
            i -= 1;
            if pred(eb.get(i)) {
                break;
            }
        }
        while i > 0 && pred(eb.get(i - 1)) {
            i -= 1;
        }
    }

    let mut m = Motion::at(cu);
    m.end = i;
    Ok(m)
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum LineClass {
    Blank,
    FormFeed,
    Text,
}

fn classify(eb: &Buffer, line: usize) -> LineClass {
    let mut o = eb.line_start(line);
    while eb.get(o).is_blank() {
        o += 1;
    }

    let r = eb.get(o);
    if r == '\n' {
        LineClass::Blank
    } else if r == '\u{c}' {
        LineClass::FormFeed
    } else {
        LineClass::Text
    }
}

/// `{` and `}`: paragraph boundaries.
///
/// A paragraph is separated by blank lines or form-feed lines; the motion
/// lands on the boundary line's first rune, or at the ends of the buffer.
pub(crate) fn m_para(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let last = eb.last_line();
    let mut ln = eb.line_of(cu);

    let mut m = Motion::at(cu);
    if c.chr == b'}' {
        for _ in 0..c.count {
            while ln <= last && classify(eb, ln) != LineClass::Text {
                ln += 1;
            }
            while ln <= last && classify(eb, ln) == LineClass::Text {
                ln += 1;
            }
        }
        m.end = if ln > last { eb.len() } else { eb.line_start(ln) };
    } else {
        for _ in 0..c.count {
            while ln > 0 && classify(eb, ln) != LineClass::Text {
                ln -= 1;
            }
            while ln > 0 && classify(eb, ln) == LineClass::Text {
                ln -= 1;
            }
        }
        m.end = eb.line_start(ln);
    }

    if op && cu <= eb.first_nonblank(cu) {
        m.order();
        m.linewise = true;
        m.beg = eb.bol(m.beg);
    }
    Ok(m)
}

const DELIMS: [(char, char); 4] = [('<', '>'), ('{', '}'), ('(', ')'), ('[', ']')];

/// `%`: match the bracket at or after the cursor on the current line.
pub(crate) fn m_match(ed: &mut Editor, op: bool, _c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;
    let len = eb.len();

    // First delimiter at or after the cursor on this line.
    let mut s = cu;
    let (open, close, forward) = loop {
        let r = eb.get(s);
        if r == '\n' {
            return Err(EditError::MotionFailed);
        }
        if let Some((o, cl)) = DELIMS.iter().find(|(o, cl)| r == *o || r == *cl) {
            break (Rune::from(*o), Rune::from(*cl), r == *o);
        }
        s += 1;
    };

    let mut depth: i32 = 0;
    let mut i = s;
    let target = loop {
        let r = eb.get(i);
        if r == open {
            depth += 1;
        } else if r == close {
            depth -= 1;
        }
        if depth == 0 {
            break i;
        }
        i = if forward { i + 1 } else { i.wrapping_sub(1) };
        if i >= len {
            return Err(EditError::MotionFailed);
        }
    };

    let mut m = Motion::at(cu);
    if !op {
        m.end = target;
        return Ok(m);
    }

    let (blo, bhi) = if s < target { (s, target) } else { (target, s) };
    m.beg = cu.min(target);
    m.end = bhi + 1;

    let open_clear = eb.slice(eb.bol(blo), blo).iter().all(Rune::is_blank);
    let close_clear = eb.slice(bhi + 1, eb.eol(bhi)).iter().all(Rune::is_blank);
    if open_clear && close_clear {
        m.linewise = true;
        m.beg = eb.bol(blo);
        m.end = (eb.eol(bhi) + 1).min(len);
    }
    Ok(m)
}

/// `G`: go to a line by number, or to limbo without a count.
pub(crate) fn m_goto(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let cu = ed.win.cu;

    let mut m = Motion::at(cu);
    if c.count == 0 {
        m.end = eb.len();
    } else {
        let target = c.count as usize - 1;
        if target > eb.last_line() {
            return Err(EditError::MotionFailed);
        }
        m.end = eb.first_nonblank(eb.line_start(target));
    }

    if op {
        m.order();
        linewise(eb, &mut m);
    }
    Ok(m)
}

/// `H`, `M`, `L`: top, middle, and bottom visible line.
pub(crate) fn m_screen(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let vis = ed.win.visible();
    let count = c.count as usize;

    if vis.is_empty() {
        return Err(EditError::MotionFailed);
    }

    let idx = match c.chr {
        b'H' | b'L' if count > vis.len() => return Err(EditError::MotionFailed),
        b'H' => count - 1,
        b'L' => vis.len() - count,
        _ => vis.len() / 2,
    };

    let eb = &ed.win.eb;
    let mut m = Motion::at(ed.win.cu);
    m.end = eb.first_nonblank(vis[idx]);
    if op {
        m.order();
        linewise(eb, &mut m);
    }
    Ok(m)
}

/// `'` and `` ` ``: jump to a mark, line-wise and rune-wise respectively.
pub(crate) fn m_mark(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let off = eb.get_mark(c.arg).ok_or(EditError::MarkNotSet(c.arg))?;

    let mut m = Motion::at(ed.win.cu);
    if c.chr == b'`' {
        m.end = off;
    } else {
        m.end = eb.first_nonblank(off);
        if op {
            m.order();
            linewise(eb, &mut m);
        }
    }
    Ok(m)
}

/// `n` and `N`: jump to the next occurrence of the selection text.
///
/// Falls back to the anonymous yank when there is no selection. The found
/// span becomes the new selection.
pub(crate) fn m_search(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    let eb = &ed.win.eb;
    let needle: Vec<Rune> = match (eb.get_mark(SEL_BEG), eb.get_mark(SEL_END)) {
        (Some(b), Some(e)) if b < e => eb.slice(b, e),
        _ => ed.regs.anon().runes.clone(),
    };
    if needle.is_empty() {
        return Err(EditError::NoSelection);
    }

    let reverse = c.chr == b'N';
    let mut pos = ed.win.cu;
    for _ in 0..c.count {
        pos = search::look(eb, pos, &needle, reverse).ok_or(EditError::NotFound)?;
    }

    let mut m = Motion::at(ed.win.cu);
    m.end = pos;

    ed.win.eb.set_mark(SEL_BEG, pos);
    ed.win.eb.set_mark(SEL_END, pos + needle.len());

    if op {
        m.order();
        linewise(&ed.win.eb, &mut m);
    }
    Ok(m)
}

/// `/`: the current selection, as an operand region only.
pub(crate) fn m_sel(ed: &mut Editor, op: bool, c: &Cmd) -> EditResult<Motion> {
    if !op || c.count != 1 {
        return Err(EditError::MotionFailed);
    }

    let eb = &ed.win.eb;
    let beg = eb.get_mark(SEL_BEG).ok_or(EditError::NoSelection)?;
    let end = eb.get_mark(SEL_END).ok_or(EditError::NoSelection)?;
    if beg >= end {
        return Err(EditError::NoSelection);
    }

    let mut m = Motion::at(beg);
    m.end = end;
    Ok(m)
}
