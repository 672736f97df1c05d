//! SLIP-0010 hardened key derivation for ed25519.
//!
//! The master key and chain code come from HMAC-SHA512 keyed with
//! `"ed25519 seed"` over the BIP-39 seed. Each child step is HMAC-SHA512
//! over `0x00 || parent_key || be32(index + 2^31)` keyed with the parent
//! chain code, split 32/32 into the child key and chain code. Ed25519 has
//! no non-hardened derivation, so [`ExtendedKey::child`] hardens the
//! index unconditionally.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{ACCOUNT_PATH, HARDENED_OFFSET};
use crate::mnemonic::Seed;

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 curve constant keying the master HMAC.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// Key material for one level of the derivation tree: a 32-byte key and
/// its 32-byte chain code.
///
/// Intermediate levels are discarded as the walk proceeds; the final
/// level's key becomes the ed25519 signing seed. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Derive the master key and chain code from a BIP-39 seed.
    pub fn master(seed: &Seed) -> Self {
        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY)
            .expect("HMAC-SHA512 accepts any key length");
        mac.update(seed.as_bytes());
        Self::split(&mac.finalize().into_bytes())
    }

    /// Derive the hardened child at `index`.
    ///
    /// The hardened offset is applied here; callers pass raw path indices.
    pub fn child(&self, index: u32) -> Self {
        let hardened = index | HARDENED_OFFSET;
        let mut data = [0u8; 37];
        data[1..33].copy_from_slice(&self.key);
        data[33..].copy_from_slice(&hardened.to_be_bytes());

        let mut mac = HmacSha512::new_from_slice(&self.chain_code)
            .expect("HMAC-SHA512 accepts any key length");
        mac.update(&data);
        let child = Self::split(&mac.finalize().into_bytes());
        data.zeroize();
        child
    }

    /// The 32-byte derived key.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Split a 64-byte HMAC digest into (key, chain code).
    fn split(digest: &[u8]) -> Self {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..64]);
        Self { key, chain_code }
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// Walk a hardened path from a seed: a fold of [`ExtendedKey::child`]
/// over the path indices, starting at the master key.
pub fn derive_path(seed: &Seed, path: &[u32]) -> ExtendedKey {
    path.iter()
        .fold(ExtendedKey::master(seed), |parent, &index| {
            parent.child(index)
        })
}

/// Derive the account key for the fixed path `44'/1729'/0'/0'`.
pub fn derive_account_key(seed: &Seed) -> ExtendedKey {
    derive_path(seed, &ACCOUNT_PATH)
}
