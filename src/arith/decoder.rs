//! The arithmetic decoder half of [`super`].

use crate::arith::{rescale, LOWL, MASK};
use crate::byte_stream::ByteReader;
use crate::cdf::Cdf;
use crate::error::CdfError;
use crate::MAX_ALPHABET_SIZE;

/// Decodes a byte message encoded by [`crate::arith::ArithEncoder`] against
/// the same [`Cdf`] it was encoded with.
///
/// Unlike the encoder, decoding never fails: a corrupt or truncated stream
/// decodes to *some* byte sequence rather than reporting an error, matching
/// the reference implementation. It is the caller's responsibility to have
/// the matching `Cdf` (the wire format carries no framing for it, see the
/// [`crate::arith`] module docs).
pub struct ArithDecoder {
    cdf: Vec<u32>,
    nsym: u32,
}

impl ArithDecoder {
    /// Prepares a decoder for `cdf`. Fails with
    /// [`CdfError::AlphabetTooLarge`] under the same condition as
    /// [`crate::arith::ArithEncoder::new`].
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

    /// Decodes symbols from `encoded` until the implicit end-of-message
    /// symbol is reached, returning the decoded bytes (the end symbol itself
    /// is not part of the output).
    pub fn decode(&self, encoded: &[u8]) -> Vec<u8> {
        let mut stream = ByteReader::new(encoded);
        let mut l = MASK;
        let mut v: u64 = 0;
        for _ in 0..4 {
            v = (v << 8) | u64::from(stream.pop_u8());
        }

        let mut out = Vec::new();
        loop {
            let mut s_lo: u32 = 0;
            let mut s_hi: u32 = self.nsym;
            let mut x: u64 = 0;
            let mut y: u64 = l;

            while s_hi - s_lo > 1 {
                let m = (s_lo + s_hi) / 2;
                let z = (l * u64::from(self.cdf[m as usize])) >> 32;
                if z > v {
                    s_hi = m;
                    y = z;
                } else {
                    s_lo = m;
                    x = z;
                }
            }

            v -= x;
            l = y - x;

            if s_lo == self.nsym - 1 {
                break;
            }
            out.push(s_lo as u8);

            while l < LOWL {
                v = ((v << 8) & MASK) + u64::from(stream.pop_u8());
                l = (l << 8) & MASK;
            }
        }

        out
    }
}
