//! Base58Check encoding with chain version prefixes.
//!
//! Layout: `Base58(prefix || payload || checksum)` where the checksum is
//! the first four bytes of `SHA256(SHA256(prefix || payload))`. The
//! prefix bytes are chosen so the rendered string starts with a fixed
//! role marker (`mv1`, `edpk`, `edsk`); see [`crate::constants`].

use sha2::{Digest, Sha256};

use crate::error::Base58Error;

/// Checksum length in bytes.
const CHECKSUM_LEN: usize = 4;

/// Encode `payload` under a version `prefix`.
///
/// Total for any input; callers guarantee the payload length matches
/// what the role's prefix expects.
pub fn encode(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, verifying the checksum and the expected
/// version prefix. Returns the raw payload.
pub fn decode(s: &str, prefix: &[u8]) -> Result<Vec<u8>, Base58Error> {
    let raw = bs58::decode(s)
        .into_vec()
        .map_err(|_| Base58Error::InvalidCharacter)?;
    if raw.len() < prefix.len() + CHECKSUM_LEN {
        return Err(Base58Error::TooShort(raw.len()));
    }

    let (body, checksum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    let expected = double_sha256(body);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(Base58Error::InvalidChecksum);
    }
    if !body.starts_with(prefix) {
        return Err(Base58Error::PrefixMismatch);
    }
    Ok(body[prefix.len()..].to_vec())
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}
