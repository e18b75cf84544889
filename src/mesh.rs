//! Composition of [`crate::aes`] and [`crate::nonce`] into the single
//! operation the host actually needs: decrypt (or encrypt — CTR is
//! symmetric) a mesh packet's payload in place.

use crate::aes::AesCtr;
use crate::nonce;

/// The byte offset within the 16-byte CTR block below which bytes are held
/// constant (the nonce) and at or above which they increment (the counter).
const CTR_START: u8 = 12;

/// Decrypts (or encrypts) `payload` in place using AES-128-CTR keyed by
/// `key`, with a nonce derived from `(src_id, id)`.
///
/// Internally pads `payload` to a 16-byte multiple with zeros in a scratch
/// buffer (the padding is never written back), applies the keystream over
/// the padded region, then copies only the original `payload.len()` bytes
/// back. Since CTR is self-inverse, this same function serves both
/// directions; it is named for its dominant use here (mesh packets arrive
/// encrypted).
pub fn decrypt_in_place(key: [u8; 16], src_id: u32, id: u32, payload: &mut [u8]) {
    let nonce = nonce::build(src_id, id);
    let mut ctr = AesCtr::new(key, nonce, CTR_START);

    let padded_len = payload.len().div_ceil(16) * 16;
    let mut scratch = vec![0u8; padded_len];
    scratch[..payload.len()].copy_from_slice(payload);

    ctr.apply(&mut scratch);

    payload.copy_from_slice(&scratch[..payload.len()]);
}
