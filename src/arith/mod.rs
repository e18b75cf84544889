//! A fixed-precision range-based arithmetic coder.
//!
//! This follows Said's Algorithm 22-29[1]: the cumulative distribution of the
//! input alphabet is rescaled to fixed-point integers, the coding interval
//! `[b, b+l)` is narrowed by each symbol's slice of that distribution, and
//! the interval is renormalized by emitting (or consuming) one byte whenever
//! it gets too short to keep 24 bits of precision. An implicit
//! end-of-message symbol occupies a small reserved region at the top of the
//! fixed-point range, so a caller never needs to transmit the message length
//! alongside the encoded bytes.
//!
//! Unlike an adaptive coder, nothing here maintains a running model: the
//! [`crate::cdf::Cdf`] is a parameter to both [`ArithEncoder::encode`] and
//! [`ArithDecoder::decode`], computed fresh per message (typically by
//! [`crate::cdf::CdfBuilder`]) and not serialized by this crate. A decoder in
//! a real deployment needs that same `Cdf` communicated by some other means;
//! this module takes no position on how.
//!
//! [1]: Said, A. "Introduction to Arithmetic Coding - Theory and Practice."
//! Hewlett Packard Laboratories Report: 2004-2076.

mod decoder;
mod encoder;

pub use decoder::ArithDecoder;
pub use encoder::ArithEncoder;

/// Reserved fixed-point width at the top of the coding range for the
/// implicit end-of-message symbol.
const D: u64 = 256;
/// The renormalization threshold: below this interval length, precision has
/// degraded enough that a byte must be emitted (encode) or consumed (decode).
const LOWL: u64 = 1 << 24;
/// All arithmetic is carried out modulo `2^32`; only the low 32 bits of `b`
/// and `l` are significant.
const MASK: u64 = (1u64 << 32) - 1;

/// Rescales a floating-point [`crate::cdf::Cdf`] to the coder's fixed-point
/// representation.
///
/// Returns `NSYM = M + 1` fixed-point boundaries: `C[i]` for `i < M` is the
/// rescaled boundary before regular symbol `i`, and `C[M] = 2^32 - D` is the
/// constant boundary before the implicit end symbol (whose own upper bound is
/// `2^32`, never materialized since it coincides with a full-length
/// interval).
fn rescale(cdf: &crate::cdf::Cdf) -> Vec<u32> {
    let scale = (MASK + 1 - D) as f64; // 2^32 - D
    let probs = cdf.values();
    let m = cdf.alphabet_size();
    let mut table = Vec::with_capacity(m + 1);
    for &p in &probs[..m] {
        table.push((scale * p) as u32);
    }
    table.push((MASK + 1 - D) as u32);
    table
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::cdf::{Cdf, CdfBuilder};
    use nanorand::{Rng, WyRand};

    fn round_trip(message: &[u8]) {
        let cdf = CdfBuilder::build(message).unwrap();
        let mut out = vec![0u8; message.len() + 16];
        let n = ArithEncoder::new(&cdf)
            .unwrap()
            .encode(message, &mut out)
            .unwrap();
        let decoded = ArithDecoder::new(&cdf).unwrap().decode(&out[..n]);
        assert_eq!(decoded, message);
    }

    #[test]
    fn round_trip_repeated_byte() {
        round_trip(&[0x41; 8]);
    }

    #[test]
    fn round_trip_full_byte_alphabet() {
        let message: Vec<u8> = (0..=255u8).collect();
        round_trip(&message);
    }

    #[test]
    fn round_trip_strictly_increasing() {
        let message: Vec<u8> = (0..64u8).collect();
        round_trip(&message);
    }

    #[test]
    fn round_trip_single_repeated_symbol_100_times() {
        round_trip(&[0x01; 100]);
    }

    #[test]
    fn round_trip_seeded_random_buffers() {
        let mut rng = WyRand::new_seed(1234);
        for _ in 0..64 {
            let len = 1 + (rng.generate_range(0u32..256u32) as usize);
            let message: Vec<u8> = (0..len).map(|_| rng.generate_range(0u8..=255u8)).collect();
            round_trip(&message);
        }
    }

    #[test]
    fn trailing_zero_padding_does_not_change_decode() {
        let message = b"AAAAAAAA";
        let cdf = CdfBuilder::build(message).unwrap();
        let mut out = vec![0u8; message.len() + 16];
        let n = ArithEncoder::new(&cdf)
            .unwrap()
            .encode(message, &mut out)
            .unwrap();

        let decoded_exact = ArithDecoder::new(&cdf).unwrap().decode(&out[..n]);
        let mut padded = out[..n].to_vec();
        padded.extend_from_slice(&[0u8; 9]);
        let decoded_padded = ArithDecoder::new(&cdf).unwrap().decode(&padded);

        assert_eq!(decoded_exact, decoded_padded);
        assert_eq!(decoded_exact, message);
    }

    #[test]
    fn repeated_byte_compresses_to_a_handful_of_bytes() {
        let message = [0x01u8; 100];
        let cdf = CdfBuilder::build(&message).unwrap();
        let mut out = vec![0u8; message.len() + 16];
        let n = ArithEncoder::new(&cdf)
            .unwrap()
            .encode(&message, &mut out)
            .unwrap();
        assert!((3..=5).contains(&n), "expected 3-5 bytes, got {n}");
    }

    #[test]
    fn uniform_alphabet_is_nearly_incompressible() {
        let message: Vec<u8> = (0..=255u8).collect();
        let cdf = CdfBuilder::build(&message).unwrap();
        let mut out = vec![0u8; message.len() + 16];
        let n = ArithEncoder::new(&cdf)
            .unwrap()
            .encode(&message, &mut out)
            .unwrap();
        let diff = n as i64 - message.len() as i64;
        assert!((-2..=4).contains(&diff), "unexpected size delta: {diff}");
    }

    #[test]
    fn alphabet_too_large_is_rejected() {
        let cdf = Cdf::from_probabilities(&vec![1.0 / 384.0; 384]);
        assert_eq!(cdf, Err(crate::error::CdfError::AlphabetTooLarge));
    }

    #[test]
    fn message_byte_outside_an_independently_supplied_cdf_is_rejected() {
        // `Cdf::from_probabilities` need not have been derived from the
        // message it's used to encode; a byte the CDF doesn't cover must be
        // rejected rather than indexed out of bounds.
        let cdf = Cdf::from_probabilities(&[0.5, 0.5]).unwrap();
        let message = [0u8, 1, 2]; // symbol `2` is outside the 2-symbol alphabet
        let mut out = vec![0u8; message.len() + 16];
        let err = ArithEncoder::new(&cdf)
            .unwrap()
            .encode(&message, &mut out)
            .unwrap_err();
        assert_eq!(err, crate::error::ArithEncodeError::SymbolOutOfRange);
    }
}
