//! AES-128 counter mode.

use crate::aes::block::Aes128;

/// A keystream generator in counter (CTR) mode, with a caller-controlled
/// boundary between the constant nonce prefix and the incrementing counter
/// suffix of the 16-byte block.
///
/// CTR is self-inverse: [`AesCtr::apply`] both encrypts and decrypts,
/// whichever the caller needs.
pub struct AesCtr {
    cipher: Aes128,
    ctr: [u8; 16],
    state: [u8; 16],
    idx: u8,
    ctr_start: u8,
}

impl AesCtr {
    /// Creates a counter-mode keystream generator.
    ///
    /// `iv` is the full 16-byte initial counter block (typically a nonce in
    /// bytes `[0, ctr_start)` and zero in `[ctr_start, 16)`). `ctr_start` is
    /// the inclusive byte offset below which `iv`'s bytes are held constant;
    /// only `[ctr_start, 16)` is incremented across blocks.
    pub fn new(key: [u8; 16], iv: [u8; 16], ctr_start: u8) -> Self {
        debug_assert!(ctr_start <= 16);
        Self {
            cipher: Aes128::new(key),
            ctr: iv,
            state: [0u8; 16],
            idx: 16, // forces keystream generation on first use
            ctr_start,
        }
    }

    /// Advances the counter, then generates the next keystream block from it.
    ///
    /// The increment runs *before* the block encryption, so the first block
    /// produced from a freshly-built `AesCtr` is `encrypt(iv with the counter
    /// region incremented by one)`, not `encrypt(iv)` itself — the counter
    /// region is never used at its caller-supplied starting value as a block
    /// input. This is a deliberate departure from the increment-after-encrypt
    /// order in `aes128_crypt` in the reference implementation; see
    /// `DESIGN.md` for why.
    ///
    /// The increment walks every byte from index 15 down to `ctr_start`
    /// inclusive regardless of where carry propagation would actually stop;
    /// this constant-time discipline is load-bearing and must not be
    /// replaced by an early-exit loop even though the two are functionally
    /// equivalent.
    fn refill(&mut self) {
        let mut carry: u16 = 1;
        let mut i = 16usize;
        while i > self.ctr_start as usize {
            i -= 1;
            carry += u16::from(self.ctr[i]);
            self.ctr[i] = carry as u8;
            carry >>= 8;
        }

        self.state = self.cipher.encrypt_block(self.ctr);
        self.idx = 0;
    }

    /// XORs the keystream into `data` in place, `min(16 - idx, remaining)`
    /// bytes at a time, generating fresh keystream blocks as needed.
    pub fn apply(&mut self, data: &mut [u8]) {
        let mut offset = 0;
        while offset < data.len() {
            if self.idx >= 16 {
                self.refill();
            }
            let templen = std::cmp::min(16 - self.idx as usize, data.len() - offset);
            for i in 0..templen {
                data[offset + i] ^= self.state[self.idx as usize + i];
            }
            self.idx += templen as u8;
            offset += templen;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn ctr_self_inverse_for_arbitrary_ctr_start() {
        let key = [0x2bu8, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09,
            0xcf, 0x4f, 0x3c];
        let iv = [0x11u8; 16];
        let message: Vec<u8> = (0..200u16).map(|i| (i % 251) as u8).collect();

        for ctr_start in 0..=16u8 {
            let mut encrypted = message.clone();
            AesCtr::new(key, iv, ctr_start).apply(&mut encrypted);
            assert_ne!(encrypted, message, "ctr_start={ctr_start}");

            let mut decrypted = encrypted.clone();
            AesCtr::new(key, iv, ctr_start).apply(&mut decrypted);
            assert_eq!(decrypted, message, "ctr_start={ctr_start}");
        }
    }

    #[test]
    fn zero_key_zero_plaintext_matches_raw_block_encryption() {
        let key = [0u8; 16];
        let nonce = [0u8; 12];
        let mut iv = [0u8; 16];
        iv[..12].copy_from_slice(&nonce);

        let mut keystream = [0u8; 16];
        AesCtr::new(key, iv, 12).apply(&mut keystream);

        let mut counter_block = [0u8; 16];
        counter_block[15] = 1;
        let expected = Aes128::new(key).encrypt_block(counter_block);

        assert_eq!(keystream, expected);
    }

    #[test]
    fn successive_blocks_use_successive_counters() {
        let key = [0u8; 16];
        let nonce: [u8; 12] = [0xDD, 0xCC, 0xBB, 0xAA, 0, 0, 0, 0, 0x78, 0x56, 0x34, 0x12];
        let mut iv = [0u8; 16];
        iv[..12].copy_from_slice(&nonce);

        let mut data = [0u8; 32];
        AesCtr::new(key, iv, 12).apply(&mut data);

        let mut block1 = iv;
        block1[15] = 1;
        let mut block2 = iv;
        block2[15] = 2;

        let cipher = Aes128::new(key);
        let expected1 = cipher.encrypt_block(block1);
        let expected2 = cipher.encrypt_block(block2);

        assert_eq!(&data[..16], &expected1[..]);
        assert_eq!(&data[16..], &expected2[..]);
    }

    #[test]
    fn counter_increment_touches_a_fixed_number_of_bytes() {
        // The increment loop always runs exactly `16 - ctr_start` steps,
        // independent of the counter's current value (including runs of
        // 0xFF that would make an early-exit loop stop sooner).
        for ctr_start in [0u8, 4, 12, 15, 16] {
            let steps_for = |ctr: [u8; 16]| -> u32 {
                let mut ctr = ctr;
                let mut carry: u16 = 1;
                let mut i = 16usize;
                let mut steps = 0;
                while i > ctr_start as usize {
                    i -= 1;
                    carry += u16::from(ctr[i]);
                    ctr[i] = carry as u8;
                    carry >>= 8;
                    steps += 1;
                }
                steps
            };
            assert_eq!(steps_for([0u8; 16]), 16 - u32::from(ctr_start));
            assert_eq!(steps_for([0xFFu8; 16]), 16 - u32::from(ctr_start));
        }
    }
}
