//! BIP-39 mnemonic validation, generation, and seed extraction.

use std::fmt;

use bip39::{Language, Mnemonic};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::DeriveError;

/// Supported mnemonic lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128 bits of entropy).
    #[default]
    Twelve,
    /// 24 words (256 bits of entropy).
    TwentyFour,
}

impl WordCount {
    /// Entropy length in bytes backing a mnemonic of this length.
    pub fn entropy_len(&self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    /// Number of words.
    pub fn words(&self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::TwentyFour => 24,
        }
    }

    /// Look up the variant for a word count, if supported.
    pub fn from_words(words: usize) -> Option<Self> {
        match words {
            12 => Some(WordCount::Twelve),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// A 64-byte BIP-39 seed derived from a mnemonic with an empty passphrase.
///
/// Secret material is zeroized on drop to prevent leaking key material
/// in freed memory.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; 64],
}

impl Seed {
    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.bytes
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Parse and validate a BIP-39 phrase.
///
/// Normalizes whitespace and converts to lowercase before parsing, then
/// enforces a word count of 12 or 24. Malformed input is an expected,
/// reportable condition, never a panic.
pub fn parse_mnemonic(phrase: &str) -> Result<Mnemonic, DeriveError> {
    let normalized = phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let m = Mnemonic::parse_in(Language::English, &normalized)
        .map_err(|e| DeriveError::InvalidMnemonic(e.to_string()))?;
    match m.word_count() {
        12 | 24 => Ok(m),
        n => Err(DeriveError::WordCount(n)),
    }
}

/// Check whether a phrase is a valid 12- or 24-word mnemonic.
pub fn validate_mnemonic(phrase: &str) -> bool {
    parse_mnemonic(phrase).is_ok()
}

/// Generate a fresh mnemonic from the OS cryptographic RNG.
pub fn generate_mnemonic(words: WordCount) -> String {
    let mut entropy = [0u8; 32];
    let len = words.entropy_len();
    rand::rngs::OsRng.fill_bytes(&mut entropy[..len]);
    let m = Mnemonic::from_entropy_in(Language::English, &entropy[..len])
        .expect("16 or 32 bytes of entropy always produces a valid mnemonic");
    entropy.zeroize();
    m.to_string()
}

/// Derive the 64-byte seed from a validated mnemonic.
///
/// PBKDF2-HMAC-SHA512 over the normalized phrase with salt `"mnemonic"`
/// and an empty passphrase, 2048 iterations, per BIP-39. Deterministic:
/// the same mnemonic always yields the same seed.
pub fn seed_from_mnemonic(mnemonic: &Mnemonic) -> Seed {
    Seed::from_bytes(mnemonic.to_seed(""))
}
