//! # Literal search
//!
//! The search motions take a literal rune sequence — there is no pattern
//! language. The scan starts one position past `from`, wraps around the end
//! of the buffer, and gives up after one full cycle.
use super::buffer::Buffer;
use crate::key::Rune;

/// Find the next occurrence of `needle` after (or, reversed, before) `from`.
///
/// Returns the offset of the match start. Matches never extend into limbo.
pub fn look(eb: &Buffer, from: usize, needle: &[Rune], reverse: bool) -> Option<usize> {
    let len = eb.len();
    let n = needle.len();

    if n == 0 || n > len {
        return None;
    }

    let from = from.min(len - 1);

    for k in 1..=len {
        let i = if reverse {
            (from + len - k) % len
        } else {
            (from + k) % len
        };

        if i + n <= len && &eb.runes()[i..i + n] == needle {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runes(s: &str) -> Vec<Rune> {
        s.chars().map(Rune::from).collect()
    }

    #[test]
    fn test_forward_wraps() {
        let eb = Buffer::from("foo bar foo\n");

        assert_eq!(look(&eb, 0, &runes("foo"), false), Some(8));
        assert_eq!(look(&eb, 8, &runes("foo"), false), Some(0));
    }

    #[test]
    fn test_reverse_wraps() {
        let eb = Buffer::from("foo bar foo\n");

        assert_eq!(look(&eb, 8, &runes("foo"), true), Some(0));
        assert_eq!(look(&eb, 0, &runes("foo"), true), Some(8));
    }

    #[test]
    fn test_absent_needle() {
        let eb = Buffer::from("abc\n");

        assert_eq!(look(&eb, 0, &runes("zz"), false), None);
        assert_eq!(look(&eb, 0, &runes(""), false), None);
    }

    #[test]
    fn test_match_at_current_position_found_after_cycle() {
        let eb = Buffer::from("xabx\n");
        assert_eq!(look(&eb, 0, &runes("x"), false), Some(3));
    }
}
