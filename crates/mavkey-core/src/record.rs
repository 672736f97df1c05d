//! Wallet assembly: the per-mnemonic derivation pipeline and its batch
//! driver.
//!
//! Each mnemonic flows independently through validation, seed extraction,
//! hardened path derivation, keypair expansion, address hashing, and
//! Base58Check rendering. A failure anywhere yields no record for that
//! mnemonic; there are no partial records and no cross-mnemonic state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::address::Address;
use crate::derive::derive_account_key;
use crate::error::DeriveError;
use crate::keys::KeyPair;
use crate::mnemonic::{parse_mnemonic, seed_from_mnemonic};

/// Leading characters of a mnemonic carried in logs and error reports.
const HINT_LEN: usize = 20;

/// One derived wallet.
///
/// All four fields are functions of the same mnemonic. Built once per
/// successfully processed phrase and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// Base58Check `mv1…` address.
    pub address: String,
    /// Base58Check `edpk…` public key.
    pub public_key: String,
    /// Base58Check `edsk…` secret key.
    pub private_key: String,
    /// The source mnemonic.
    pub mnemonic: String,
}

/// A mnemonic skipped during batch derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedMnemonic {
    /// Position in the input sequence.
    pub index: usize,
    /// Leading characters of the phrase. Never the full phrase.
    pub hint: String,
    /// Why it was skipped.
    pub error: DeriveError,
}

/// Outcome of a batch run: one record per valid input, in input order,
/// plus a structured report for each skipped phrase.
#[derive(Clone, Debug, Default)]
pub struct BatchOutcome {
    /// Successfully derived wallets.
    pub records: Vec<WalletRecord>,
    /// Inputs that produced no record.
    pub skipped: Vec<SkippedMnemonic>,
}

/// Handle to the derivation pipeline.
///
/// Construct once with [`WalletDeriver::new`], then derive any number of
/// wallets. Call sites take the pipeline as an explicit value rather than
/// reaching for process-global state.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalletDeriver;

impl WalletDeriver {
    /// Create the pipeline handle.
    pub fn new() -> Self {
        Self
    }

    /// Derive one wallet from a candidate mnemonic phrase.
    ///
    /// Deterministic: the same phrase always yields byte-identical keys
    /// and encodings.
    pub fn derive(&self, phrase: &str) -> Result<WalletRecord, DeriveError> {
        let mnemonic = parse_mnemonic(phrase)?;
        let seed = seed_from_mnemonic(&mnemonic);
        let account_key = derive_account_key(&seed);
        let keypair = KeyPair::from_seed_bytes(*account_key.key());
        let public_key = keypair.public_key();
        let address = Address::from_public_key(&public_key);

        Ok(WalletRecord {
            address: address.to_base58check(),
            public_key: public_key.to_base58check(),
            private_key: keypair.to_base58check(),
            mnemonic: phrase.trim().to_string(),
        })
    }

    /// Derive wallets for a whole batch.
    ///
    /// Each phrase is processed independently; one bad mnemonic never
    /// aborts the batch. Skipped phrases are reported in the outcome and
    /// logged with their leading characters only.
    pub fn derive_batch<I, S>(&self, phrases: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();
        for (index, phrase) in phrases.into_iter().enumerate() {
            let phrase = phrase.as_ref();
            match self.derive(phrase) {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    let hint = mnemonic_hint(phrase);
                    warn!(index, %hint, %error, "skipping mnemonic");
                    outcome.skipped.push(SkippedMnemonic { index, hint, error });
                }
            }
        }
        outcome
    }
}

/// The first characters of a phrase, for logs and error reports.
///
/// Valid mnemonics are always longer than the hint, so a full phrase
/// never leaks through this path.
pub fn mnemonic_hint(phrase: &str) -> String {
    let trimmed = phrase.trim();
    match trimmed.char_indices().nth(HINT_LEN) {
        Some((pos, _)) => trimmed[..pos].to_string(),
        None => trimmed.to_string(),
    }
}
