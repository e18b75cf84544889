//! Cumulative distribution functions over a byte alphabet.
//!
//! The coder performs no adaptive modeling: a [`Cdf`] is computed fresh from
//! whatever message it will be used to encode (or supplied out-of-band by a
//! caller that already knows the distribution), never updated symbol by
//! symbol.

use crate::error::CdfError;
use crate::MAX_ALPHABET_SIZE;

/// A cumulative distribution function over `M` regular symbols.
///
/// Logical length `M + 1`: `cdf[0] == 0.0`, `cdf[M] == 1.0` (within
/// floating-point rounding), monotonically non-decreasing in between.
/// `cdf[i + 1] - cdf[i]` is the probability of symbol `i`. The implicit
/// end-of-message symbol used by [`crate::arith`] is *not* represented here;
/// it is injected only once the coder rescales this CDF to fixed point.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    values: Vec<f64>,
}

impl Cdf {
    /// Builds a `Cdf` directly from a probability-density sequence `p`,
    /// where `p[i]` is the probability of symbol `i`. The sequence must be
    /// non-empty, every entry non-negative, and the entries must sum to
    /// (approximately) `1.0`.
    ///
    /// This is the explicit-CDF path for a caller that receives the
    /// distribution out-of-band rather than deriving it from the message
    /// being coded (see [`CdfBuilder`] for the latter).
    pub fn from_probabilities(p: &[f64]) -> Result<Self, CdfError> {
        if p.is_empty() {
            return Err(CdfError::EmptyInput);
        }
        if p.len() + 1 > MAX_ALPHABET_SIZE {
            return Err(CdfError::AlphabetTooLarge);
        }
        let mut values = Vec::with_capacity(p.len() + 1);
        values.push(0.0);
        let mut acc = 0.0;
        for &pi in p {
            acc += pi;
            values.push(acc);
        }
        Ok(Self { values })
    }

    /// The number of regular symbols `M` (excludes the implicit end symbol).
    pub fn alphabet_size(&self) -> usize {
        self.values.len() - 1
    }

    /// The raw cumulative values, logical length `M + 1`.
    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Derives a [`Cdf`] from the byte histogram of a message.
///
/// This is a stateless, one-shot computation: the reference tool never
/// serializes the resulting CDF, relying instead on the decoder
/// re-deriving (or otherwise obtaining) an identical one. See
/// [`crate::arith`] module docs for how a caller without that luxury can
/// supply a [`Cdf`] explicitly.
pub struct CdfBuilder;

impl CdfBuilder {
    /// Builds the CDF for `message`.
    ///
    /// `M = max(message) + 1` is the number of regular symbols. Fails with
    /// [`CdfError::EmptyInput`] if `message` is empty, or
    /// [`CdfError::AlphabetTooLarge`] if `M + 1 > MAX_ALPHABET_SIZE`.
    pub fn build(message: &[u8]) -> Result<Cdf, CdfError> {
        if message.is_empty() {
            return Err(CdfError::EmptyInput);
        }
        let m = message.iter().copied().fold(0u8, u8::max) as usize + 1;
        if m + 1 > MAX_ALPHABET_SIZE {
            return Err(CdfError::AlphabetTooLarge);
        }

        let mut counts = vec![0u64; m];
        for &b in message {
            counts[b as usize] += 1;
        }

        let n = message.len() as f64;
        let mut values = Vec::with_capacity(m + 1);
        values.push(0.0);
        let mut acc = 0.0;
        for &c in &counts {
            acc += c as f64 / n;
            values.push(acc);
        }

        Ok(Cdf { values })
    }
}
