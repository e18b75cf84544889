#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
//! A fixed-precision arithmetic entropy coder paired with an AES-128
//! counter-mode transform, forming the core coding engine of a LoRa-mesh
//! telemetry analysis tool.
//!
//! The crate decomposes into two independent dependency chains:
//!
//! - [`cdf`] and [`arith`], built on [`byte_stream`]: a range-based
//!   arithmetic encoder/decoder over a configurable input alphabet (up to
//!   383 symbols plus an implicit end-of-message symbol), following Said's
//!   Algorithm 22-29[1]. The cumulative distribution is computed fresh per
//!   message from that message's own byte histogram — there is no adaptive
//!   modeling, context mixing, or Markov-chain probability estimation.
//! - [`aes`] and [`nonce`], composed by [`mesh::decrypt_in_place`]: an
//!   AES-128 counter-mode stream cipher used to recover mesh packet
//!   plaintext from a nonce built out of the packet identifier and the
//!   sending node's identifier.
//!
//! Everything here is single-threaded, synchronous, and allocation-light:
//! every exposed operation borrows its buffers from the caller and runs to
//! completion without yielding. There are no background workers and no
//! global mutable state — an [`arith::ArithEncoder`] or
//! [`arith::ArithDecoder`] is an ordinary stack-local value, built fresh for
//! each call and dropped when it returns.
//!
//! Out of scope for this crate: subscribing to a message broker, parsing the
//! protocol-buffer schema mesh packets are framed in, human-readable field
//! dumping, and CLI plumbing. Those are host concerns; only the byte buffer
//! at the "encrypted payload" boundary matters here.
//!
//! [1]: Said, A. "Introduction to Arithmetic Coding - Theory and Practice."
//! Hewlett Packard Laboratories Report: 2004-2076.

pub mod aes;
pub mod arith;
mod byte_stream;
pub mod cdf;
pub mod error;
pub mod mesh;
pub mod nonce;

/// The maximum number of symbols the coder's fixed-capacity CDF can hold,
/// including the implicit end-of-message symbol. Bounds the regular
/// alphabet at `MAX_ALPHABET_SIZE - 1 = 383` symbols.
///
/// This embeds Said's precision-vs-alphabet trade-off: `D = 256` worth of
/// fixed-point room (out of `2^32`) is permanently reserved for the end
/// symbol, and the coder's 32-bit registers cannot usefully distinguish a
/// probability finer than `2^-24` (see [`RENORM_THRESHOLD`]).
pub const MAX_ALPHABET_SIZE: usize = 384;

/// The width, in bits, of one output symbol. The coder is byte-oriented:
/// renormalization emits or consumes exactly one byte at a time.
pub const OUTPUT_SYMBOL_BITS: u32 = 8;

/// The total number of fixed-point bits used to represent the coding
/// interval's base and length.
pub const PRECISION_BITS: u32 = 32;

/// The renormalization threshold `2^24`: whenever the coding interval's
/// length drops below this, a byte is emitted (encode) or consumed
/// (decode). Also the coder's minimum representable probability is
/// `RENORM_THRESHOLD / 2^PRECISION_BITS = 2^-24`; a symbol less likely than
/// that cannot be represented and causes the encoder to observe a
/// zero-length interval ([`error::ArithEncodeError::DegenerateInterval`])
/// rather than silently corrupting the stream.
pub const RENORM_THRESHOLD: u32 = 1 << 24;
