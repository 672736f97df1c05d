//! End-to-end pipeline tests: golden vectors, encoding round-trip laws,
//! and batch behavior through the public API only.

use mavkey_core::constants::{PREFIX_ADDRESS, PREFIX_PUBLIC_KEY, PREFIX_SECRET_KEY};
use mavkey_core::{base58, Address, DeriveError, KeyPair, PublicKey, WalletDeriver};

/// BIP-39 English test vector, all-zero 128-bit entropy.
const VECTOR_ZERO_12: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// BIP-39 English test vector #2, 12 words.
const VECTOR_LEGAL_12: &str =
    "legal winner thank year wave sausage worth useful legal winner thank yellow";

fn vector_zero_24() -> String {
    let mut phrase = vec!["abandon"; 23].join(" ");
    phrase.push_str(" art");
    phrase
}

#[test]
fn golden_vector_zero_entropy() {
    let record = WalletDeriver::new().derive(VECTOR_ZERO_12).unwrap();
    assert_eq!(record.address, "mv1HmdN1hRxhJW1aeLpGJdvAuBY48z38JjVq");
    assert_eq!(
        record.public_key,
        "edpku4US3ZykcZifjzSGFCmFr3zRgCKndE82estE4irj4d5oqDNDvf"
    );
    assert_eq!(
        record.private_key,
        "edskS3wZrW6P38vvgnrHqjuLLz76vy5dv9QduxAQ2yG7WL5WjEubiJQUcwS49tFfwym1MBioLATPzQFckaYgGhWBUS7nmikuME"
    );
    assert_eq!(record.mnemonic, VECTOR_ZERO_12);
}

#[test]
fn golden_vector_24_words() {
    let record = WalletDeriver::new().derive(&vector_zero_24()).unwrap();
    assert_eq!(record.address, "mv1M29WbSVy2rGK32g3FbS35dG4wvZRnAZRR");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let deriver = WalletDeriver::new();
    let first = deriver.derive(VECTOR_LEGAL_12).unwrap();
    for _ in 0..10 {
        assert_eq!(deriver.derive(VECTOR_LEGAL_12).unwrap(), first);
    }
}

#[test]
fn encoded_strings_decode_to_consistent_key_material() {
    // Round-trip law: each encoded string recovers its prefix and payload,
    // and the decoded material is mutually consistent.
    let record = WalletDeriver::new().derive(VECTOR_ZERO_12).unwrap();

    let keypair = KeyPair::from_base58check(&record.private_key).unwrap();
    let public_key = PublicKey::from_base58check(&record.public_key).unwrap();
    let address = Address::from_base58check(&record.address).unwrap();

    assert_eq!(keypair.public_key(), public_key);
    assert_eq!(Address::from_public_key(&public_key), address);
    assert_eq!(keypair.to_base58check(), record.private_key);
    assert_eq!(public_key.to_base58check(), record.public_key);
    assert_eq!(address.to_base58check(), record.address);
}

#[test]
fn raw_payloads_recoverable_per_role() {
    let record = WalletDeriver::new().derive(VECTOR_ZERO_12).unwrap();
    assert_eq!(
        base58::decode(&record.address, &PREFIX_ADDRESS).unwrap().len(),
        20
    );
    assert_eq!(
        base58::decode(&record.public_key, &PREFIX_PUBLIC_KEY)
            .unwrap()
            .len(),
        32
    );
    assert_eq!(
        base58::decode(&record.private_key, &PREFIX_SECRET_KEY)
            .unwrap()
            .len(),
        64
    );
}

#[test]
fn invalid_mnemonics_produce_no_records() {
    let deriver = WalletDeriver::new();

    // 11 words.
    let eleven = vec!["abandon"; 11].join(" ");
    assert!(matches!(
        deriver.derive(&eleven),
        Err(DeriveError::InvalidMnemonic(_))
    ));

    // Valid wordlist words with a flipped final (checksum) word.
    let flipped = VECTOR_ZERO_12.replace(" about", " zoo");
    assert!(matches!(
        deriver.derive(&flipped),
        Err(DeriveError::InvalidMnemonic(_))
    ));
}

#[test]
fn batch_of_five_with_one_invalid_yields_four() {
    let twenty_four = vector_zero_24();
    let invalid = vec!["abandon"; 12].join(" ");
    let inputs = [
        VECTOR_ZERO_12,
        invalid.as_str(),
        VECTOR_LEGAL_12,
        twenty_four.as_str(),
        VECTOR_ZERO_12,
    ];

    let outcome = WalletDeriver::new().derive_batch(inputs);

    assert_eq!(outcome.records.len(), 4);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].index, 1);

    let mnemonics: Vec<&str> = outcome.records.iter().map(|r| r.mnemonic.as_str()).collect();
    assert_eq!(
        mnemonics,
        [VECTOR_ZERO_12, VECTOR_LEGAL_12, twenty_four.as_str(), VECTOR_ZERO_12]
    );
}

#[test]
fn distinct_phrases_distinct_credentials() {
    use std::collections::HashSet;

    let deriver = WalletDeriver::new();
    let mut addresses = HashSet::new();
    let mut public_keys = HashSet::new();
    for _ in 0..100 {
        let phrase = mavkey_core::generate_mnemonic(mavkey_core::WordCount::Twelve);
        let record = deriver.derive(&phrase).unwrap();
        assert!(addresses.insert(record.address));
        assert!(public_keys.insert(record.public_key));
    }
}
