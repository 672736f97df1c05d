//! # mavkey-core — deterministic Mavryk credential derivation.
//!
//! Turns BIP-39 mnemonic phrases into Mavryk account credentials along
//! the hardened path `44'/1729'/0'/0'`: PBKDF2-HMAC-SHA512 seed
//! extraction, SLIP-0010 ed25519 key derivation, keypair expansion,
//! BLAKE2b-160 address hashing, and Base58Check rendering of the address
//! (`mv1…`), public key (`edpk…`), and secret key (`edsk…`).
//!
//! # Modules
//!
//! - [`error`] — `DeriveError`, `CryptoError`, `Base58Error`
//! - [`constants`] — derivation path and version prefixes
//! - [`mnemonic`] — BIP-39 validation, generation, seed extraction
//! - [`derive`] — SLIP-0010 hardened derivation
//! - [`keys`] — ed25519 keypair expansion
//! - [`address`] — BLAKE2b-160 address and its encoding
//! - [`base58`] — Base58Check codec
//! - [`record`] — wallet assembly and the batch pipeline

pub mod address;
pub mod base58;
pub mod constants;
pub mod derive;
pub mod error;
pub mod keys;
pub mod mnemonic;
pub mod record;

// Re-exports for convenient access
pub use address::Address;
pub use derive::ExtendedKey;
pub use error::{Base58Error, CryptoError, DeriveError};
pub use keys::{KeyPair, PublicKey};
pub use mnemonic::{generate_mnemonic, validate_mnemonic, Seed, WordCount};
pub use record::{BatchOutcome, SkippedMnemonic, WalletDeriver, WalletRecord};
