//! Error types for mavkey-core.

use thiserror::Error;

/// Errors from the mnemonic-to-wallet derivation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// The phrase failed BIP-39 wordlist or checksum validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// The phrase parsed as BIP-39 but has an unsupported word count.
    #[error("unsupported word count: {0} (expected 12 or 24)")]
    WordCount(usize),

    /// Post-validation failure inside the derivation pipeline.
    ///
    /// Every step after validation is a total function, so this is a bug
    /// signal rather than an expected condition. Carries only the leading
    /// characters of the offending phrase, never the full mnemonic.
    #[error("derivation failed for \"{hint}…\": {reason}")]
    DerivationFailure {
        /// Leading characters of the phrase.
        hint: String,
        /// Description of the unexpected failure.
        reason: String,
    },
}

/// Errors from Base58Check decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// A character outside the Base58 alphabet.
    #[error("invalid base58 character")]
    InvalidCharacter,

    /// Decoded data too short to hold a version prefix and checksum.
    #[error("too short: {0} bytes")]
    TooShort(usize),

    /// The trailing four checksum bytes do not match the payload.
    #[error("invalid checksum")]
    InvalidChecksum,

    /// The version prefix does not match the expected role.
    #[error("version prefix mismatch")]
    PrefixMismatch,

    /// The payload length does not match what the role's prefix expects.
    #[error("invalid payload length: expected {expected}, got {got}")]
    PayloadLength {
        /// Expected payload length in bytes.
        expected: usize,
        /// Actual payload length in bytes.
        got: usize,
    },
}

/// Errors from key material handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// 32 bytes that do not decompress to an ed25519 point.
    #[error("invalid public key bytes")]
    InvalidPublicKey,

    /// Underlying Base58Check decode failure.
    #[error(transparent)]
    Base58(#[from] Base58Error),
}
