//! Chain constants. Version prefixes and the derivation path are
//! interoperability-critical: they must match the values used by Mavryk
//! wallets exactly, byte for byte.

/// BIP-44 purpose segment.
pub const PURPOSE: u32 = 44;

/// SLIP-44 coin type for the Mavryk/Tezos family.
pub const COIN_TYPE: u32 = 1729;

/// Account-level derivation path `44'/1729'/0'/0'`.
///
/// Every segment is hardened at derivation time; the raw indices here are
/// the pre-hardened values.
pub const ACCOUNT_PATH: [u32; 4] = [PURPOSE, COIN_TYPE, 0, 0];

/// Hardened-index offset per BIP-32 (`2^31`).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Byte length of the BLAKE2b address digest.
pub const ADDRESS_HASH_LEN: usize = 20;

/// Base58Check version prefix for `mv1` account addresses (20-byte payload).
pub const PREFIX_ADDRESS: [u8; 3] = [5, 186, 196];

/// Base58Check version prefix for `edpk` public keys (32-byte payload).
pub const PREFIX_PUBLIC_KEY: [u8; 4] = [13, 15, 37, 217];

/// Base58Check version prefix for `edsk` secret keys (64-byte payload).
pub const PREFIX_SECRET_KEY: [u8; 4] = [43, 246, 78, 7];
