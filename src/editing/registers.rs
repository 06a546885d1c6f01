//! # Yank registers
//!
//! ## Overview
//!
//! Yanked and deleted text lands in the anonymous slot, which every put reads
//! by default. Line-mode yanks additionally rotate into a ring of nine
//! numbered slots: before each store the head moves back one position, so
//! `"1` always names the freshest line-wise yank and older ones age toward
//! `"9` until the ring overwrites them.
//!
//! Register names beyond the digits parse but all resolve to the anonymous
//! slot; there is no named-register storage.
use crate::key::Rune;

/// Stored yank text together with its line-mode flag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct YankBuf {
    /// The yanked runes.
    pub runes: Vec<Rune>,

    /// Whether the runes were captured by a line-wise region.
    pub linemode: bool,
}

/// The anonymous slot plus the nine-slot rotating numeric ring.
#[derive(Default)]
pub struct Registers {
    anon: YankBuf,
    ring: [YankBuf; 9],
    ytip: usize,
}

impl Registers {
    /// Store a yanked region into the anonymous slot, rotating it into the
    /// numeric ring as well when it is line-wise.
    pub fn store(&mut self, runes: Vec<Rune>, linemode: bool) {
        if linemode {
            self.ytip = (self.ytip + 8) % 9;
            self.ring[self.ytip] = YankBuf { runes: runes.clone(), linemode };
        }

        self.anon = YankBuf { runes, linemode };
    }

    /// The anonymous slot.
    pub fn anon(&self) -> &YankBuf {
        &self.anon
    }

    /// Numeric slot `n` for `n` in 1..=9; slot 1 is the most recent.
    pub fn numbered(&self, n: usize) -> &YankBuf {
        debug_assert!((1..=9).contains(&n));
        &self.ring[(self.ytip + n - 1) % 9]
    }

    /// Resolve a register name from a `"x` prefix.
    ///
    /// No name at all is the anonymous slot, and digits 1 through 9 address
    /// the ring. Other names parse but hold nothing.
    pub fn named(&self, name: Option<char>) -> &YankBuf {
        static EMPTY: YankBuf = YankBuf { runes: Vec::new(), linemode: false };

        match name {
            None => &self.anon,
            Some(c) => match c.to_digit(10) {
                Some(n @ 1..=9) => self.numbered(n as usize),
                _ => &EMPTY,
            },
        }
    }
}
