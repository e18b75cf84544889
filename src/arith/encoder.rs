//! The arithmetic encoder half of [`super`].

use crate::arith::{rescale, LOWL, MASK};
use crate::byte_stream::ByteWriter;
use crate::cdf::Cdf;
use crate::error::{ArithEncodeError, CdfError};
use crate::MAX_ALPHABET_SIZE;

/// Encodes a byte message against a fixed [`Cdf`].
///
/// Built fresh per call, used once, then dropped: there is no adaptive state
/// carried between messages or between calls.
pub struct ArithEncoder {
    cdf: Vec<u32>,
    nsym: u32,
}

impl ArithEncoder {
    /// Prepares an encoder for `cdf`.
    ///
    /// Fails with [`CdfError::AlphabetTooLarge`] if `cdf`'s alphabet plus the
    /// implicit end symbol would exceed [`MAX_ALPHABET_SIZE`].
    pub fn new(cdf: &Cdf) -> Result<Self, CdfError> {
        let m = cdf.alphabet_size();
        if m + 1 > MAX_ALPHABET_SIZE {
            return Err(CdfError::AlphabetTooLarge);
        }
        Ok(Self {
            cdf: rescale(cdf),
            nsym: (m + 1) as u32,
        })
    }

    /// Encodes every symbol of `message` followed by the implicit
    /// end-of-message symbol, writing into `out`.
    ///
    /// Returns the number of bytes written. `out` must be large enough for
    /// the encoded message plus a handful of renormalization/finalization
    /// bytes (four or five is always sufficient headroom beyond the
    /// information-theoretic size); a too-small buffer surfaces as
    /// [`ArithEncodeError::OutputCapacity`]. Every byte of `message` must be
    /// less than the `Cdf`'s alphabet size (the `Cdf` need not have been
    /// derived from `message` itself — see [`crate::cdf::Cdf::from_probabilities`]
    /// — so this is checked rather than assumed); a byte outside that range
    /// surfaces as [`ArithEncodeError::SymbolOutOfRange`]. On any error the
    /// number of bytes actually written is unspecified and must not be
    /// inspected.
    pub fn encode(&self, message: &[u8], out: &mut [u8]) -> Result<usize, ArithEncodeError> {
        let alphabet_size = self.nsym - 1;
        if message.iter().any(|&sym| u32::from(sym) >= alphabet_size) {
            return Err(ArithEncodeError::SymbolOutOfRange);
        }

        let mut state = State {
            b: 0,
            l: MASK,
            cdf: &self.cdf,
            nsym: self.nsym,
            stream: ByteWriter::new(out),
        };

        for &sym in message {
            state.step(u32::from(sym))?;
        }
        state.step(self.nsym - 1)?;
        state.select()?;

        Ok(state.stream.len())
    }
}

struct State<'a> {
    b: u64,
    l: u64,
    cdf: &'a [u32],
    nsym: u32,
    stream: ByteWriter<'a>,
}

impl<'a> State<'a> {
    fn update(&mut self, sym: u32) -> Result<(), ArithEncodeError> {
        let a = self.b;
        let x = (self.l * u64::from(self.cdf[sym as usize])) >> 32;
        let y = if sym == self.nsym - 1 {
            self.l
        } else {
            (self.l * u64::from(self.cdf[sym as usize + 1])) >> 32
        };
        self.b = (self.b + x) & MASK;
        self.l = y - x;

        if self.l == 0 {
            return Err(ArithEncodeError::DegenerateInterval);
        }
        if a > self.b {
            self.stream.carry_u8();
        }
        Ok(())
    }

    fn renormalize(&mut self) -> Result<(), ArithEncodeError> {
        while self.l < LOWL {
            self.stream.push_u8((self.b >> 24) as u8)?;
            self.l = (self.l << 8) & MASK;
            self.b = (self.b << 8) & MASK;
        }
        Ok(())
    }

    fn step(&mut self, sym: u32) -> Result<(), ArithEncodeError> {
        self.update(sym)?;
        self.renormalize()
    }

    /// Disambiguating finalize: selects a code word inside the surviving
    /// interval that remains correctly decodable regardless of what bits, if
    /// any, follow it in the caller's storage.
    fn select(&mut self) -> Result<(), ArithEncodeError> {
        let a = self.b;
        self.b = (self.b + (1 << 23)) & MASK;
        self.l = (1 << 16) - 1;
        if a > self.b {
            self.stream.carry_u8();
        }
        self.renormalize()
    }
}

