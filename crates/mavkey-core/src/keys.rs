//! Ed25519 keypair expansion and key encoding.
//!
//! Wraps ed25519-dalek for the underlying key expansion: the 32-byte
//! derived seed goes through SHA-512 and scalar clamping to produce the
//! signing scalar and its public point. Expansion is a total function
//! over any 32-byte input.

use std::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};

use crate::base58;
use crate::constants::{PREFIX_PUBLIC_KEY, PREFIX_SECRET_KEY};
use crate::error::{Base58Error, CryptoError};

/// Ed25519 keypair expanded from a 32-byte derived seed.
///
/// The secret key is zeroized on drop by the underlying library. Use
/// [`KeyPair::from_seed_bytes`] for deterministic derivation.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Expand a 32-byte derived seed into a keypair.
    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&bytes),
        }
    }

    /// Derive the public key from this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// The raw 32-byte secret seed. Handle with care.
    pub fn secret_seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// The 64-byte expanded secret key: seed followed by the public key.
    ///
    /// This is the layout `edsk` strings encode.
    pub fn to_keypair_bytes(&self) -> [u8; 64] {
        self.signing_key.to_keypair_bytes()
    }

    /// Encode the secret key as an `edsk` Base58Check string.
    pub fn to_base58check(&self) -> String {
        base58::encode(&PREFIX_SECRET_KEY, &self.to_keypair_bytes())
    }

    /// Decode an `edsk` string back into a keypair.
    pub fn from_base58check(s: &str) -> Result<Self, CryptoError> {
        let payload = base58::decode(s, &PREFIX_SECRET_KEY)?;
        if payload.len() != 64 {
            return Err(Base58Error::PayloadLength {
                expected: 64,
                got: payload.len(),
            }
            .into());
        }
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&payload[..32]);
        Ok(Self::from_seed_bytes(seed))
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self::from_seed_bytes(self.secret_seed())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Ed25519 public key: the address preimage and the `edpk` payload.
#[derive(Clone)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from raw bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let vk = VerifyingKey::from_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self { verifying_key: vk })
    }

    /// Get the raw public key bytes (32 bytes).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Encode as an `edpk` Base58Check string.
    pub fn to_base58check(&self) -> String {
        base58::encode(&PREFIX_PUBLIC_KEY, &self.to_bytes())
    }

    /// Decode an `edpk` string.
    pub fn from_base58check(s: &str) -> Result<Self, CryptoError> {
        let payload = base58::decode(s, &PREFIX_PUBLIC_KEY)?;
        let bytes: [u8; 32] =
            payload
                .as_slice()
                .try_into()
                .map_err(|_| Base58Error::PayloadLength {
                    expected: 32,
                    got: payload.len(),
                })?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

impl std::hash::Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}
