//! Account addresses: the 20-byte BLAKE2b digest of the public key,
//! rendered as an `mv1…` Base58Check string.

use std::fmt;
use std::str::FromStr;

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;

use crate::base58;
use crate::constants::{ADDRESS_HASH_LEN, PREFIX_ADDRESS};
use crate::error::Base58Error;
use crate::keys::PublicKey;

/// A Mavryk account address.
///
/// Internally the BLAKE2b-160 digest (no key, no salt) of the raw
/// 32-byte ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_HASH_LEN]);

impl Address {
    /// Hash a public key into its address.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut hasher =
            Blake2bVar::new(ADDRESS_HASH_LEN).expect("20 is a valid BLAKE2b output length");
        hasher.update(&public_key.to_bytes());
        let mut digest = [0u8; ADDRESS_HASH_LEN];
        hasher
            .finalize_variable(&mut digest)
            .expect("output buffer matches configured digest length");
        Self(digest)
    }

    /// Create an address from a raw 20-byte digest.
    pub fn from_bytes(bytes: [u8; ADDRESS_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_HASH_LEN] {
        &self.0
    }

    /// Encode as an `mv1…` Base58Check string.
    pub fn to_base58check(&self) -> String {
        base58::encode(&PREFIX_ADDRESS, &self.0)
    }

    /// Decode an `mv1…` Base58Check string.
    pub fn from_base58check(s: &str) -> Result<Self, Base58Error> {
        let payload = base58::decode(s, &PREFIX_ADDRESS)?;
        let bytes: [u8; ADDRESS_HASH_LEN] =
            payload
                .as_slice()
                .try_into()
                .map_err(|_| Base58Error::PayloadLength {
                    expected: ADDRESS_HASH_LEN,
                    got: payload.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58check())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58check())
    }
}

impl FromStr for Address {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58check(s)
    }
}
