//! # Focused window
//!
//! The window pairs a [Buffer] with a cursor and the list of visible line
//! start offsets. The frame is what the screen-relative motions (`H`, `M`,
//! `L`) and the scroll commands work against; a graphical host would rebuild
//! it from its own layout, and the command dispatcher refreshes it after
//! every command so it never goes stale between keystrokes.
use super::buffer::Buffer;

/// A view onto a buffer: cursor, visible-line frame, and scrolling.
pub struct Window {
    /// The buffer being edited.
    pub eb: Buffer,

    /// Cursor position as a rune offset into `eb`.
    pub cu: usize,

    nl: usize,
    l: Vec<usize>,
}

impl Window {
    /// Create a window over `eb` showing at most `nl` lines, framed at the
    /// top of the buffer.
    pub fn new(eb: Buffer, nl: usize) -> Self {
        let mut win = Window { eb, cu: 0, nl, l: Vec::new() };
        win.frame_from(0);
        win
    }

    /// Start offsets of the currently visible lines.
    ///
    /// The last entry may be the start of limbo when the end of the buffer is
    /// on screen.
    pub fn visible(&self) -> &[usize] {
        &self.l
    }

    /// Recompute the frame from its current top line.
    pub fn reframe(&mut self) {
        let top = self.l.first().copied().unwrap_or(0);
        self.frame_from(top);
    }

    /// Move the frame down (`lines > 0`) or up (`lines < 0`), clamping at the
    /// ends of the buffer.
    pub fn scroll(&mut self, lines: isize) {
        let mut top = self.l.first().copied().unwrap_or(0);

        if lines >= 0 {
            for _ in 0..lines {
                if top >= self.eb.len() {
                    break;
                }
                top = self.eb.eol(top) + 1;
            }
        } else {
            for _ in 0..lines.unsigned_abs() {
                if top == 0 {
                    break;
                }
                top = self.eb.bol(top - 1);
            }
        }

        self.frame_from(top);
    }

    fn frame_from(&mut self, top: usize) {
        let mut off = self.eb.bol(top.min(self.eb.len()));

        self.l.clear();
        for _ in 0..self.nl {
            self.l.push(off);
            if off >= self.eb.len() {
                break;
            }
            off = self.eb.eol(off) + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lists_line_starts() {
        let win = Window::new(Buffer::from("a\nbb\nccc\n"), 2);
        assert_eq!(win.visible(), &[0, 2]);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut win = Window::new(Buffer::from("a\nb\nc\n"), 2);

        win.scroll(1);
        assert_eq!(win.visible()[0], 2);

        win.scroll(10);
        assert_eq!(win.visible()[0], 6);

        win.scroll(-1);
        assert_eq!(win.visible()[0], 4);

        win.scroll(-10);
        assert_eq!(win.visible()[0], 0);
    }

    #[test]
    fn test_frame_stops_at_limbo() {
        let win = Window::new(Buffer::from("a\n"), 5);
        assert_eq!(win.visible(), &[0, 2]);
    }
}
