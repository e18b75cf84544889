//! Deterministic per-packet nonce construction.

/// Builds the 16-byte CTR initial counter block for a mesh packet.
///
/// Layout, matching the protocol's convention of copying a 32-bit packet
/// identifier into an 8-byte slot (leaving the upper half zero):
///
/// - bytes `[0, 8)`: `packet_id`, little-endian, in the low 4 bytes; the
///   upper 4 bytes are zero.
/// - bytes `[8, 12)`: `src_id`, little-endian.
/// - bytes `[12, 16)`: zero — the block counter, owned and incremented by
///   [`crate::aes::AesCtr`], not by this function.
///
/// Callers should configure the resulting [`crate::aes::AesCtr`] with
/// `ctr_start = 12` so only those last four bytes increment across blocks.
pub fn build(src_id: u32, packet_id: u32) -> [u8; 16] {
    let mut nonce = [0u8; 16];
    nonce[0..4].copy_from_slice(&packet_id.to_le_bytes());
    nonce[8..12].copy_from_slice(&src_id.to_le_bytes());
    nonce
}
