//! Detached signatures over a length-prefixed octet string.
//!
//! The payload is wrapped as `0x04 || length || payload`, an octet-string
//! envelope with no hash-algorithm identifier, and pushed through the
//! signing-direction PKCS#1 v1.5 transform. Verification recovers the
//! envelope with the public key and compares the enclosed payload against
//! the caller's copy. Every verification failure mode collapses to `false`;
//! no distinction is surfaced between a bad signature, a corrupt envelope
//! and a wrong key.

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::pkcs1v15;
use crate::traits::PublicKeyParts;

/// Tag marking the envelope as an octet string.
const OCTET_STRING_TAG: u8 = 0x04;

/// Worst-case envelope header: the tag plus two length bytes.
const HEADER_SIZE: usize = 3;

/// Signs `data` with the private key, returning a signature of exactly the
/// size of the modulus.
///
/// The payload must be no longer than the size of the modulus minus
/// [`pkcs1v15::PADDING_SIZE`] minus the envelope header (3 bytes), or
/// `Error::MessageTooLong` is returned. Signing is deterministic; it
/// consumes no randomness.
pub fn sign(priv_key: &RsaPrivateKey, data: &[u8]) -> Result<Vec<u8>> {
    let limit = priv_key
        .size()
        .checked_sub(pkcs1v15::PADDING_SIZE + HEADER_SIZE)
        .ok_or(Error::MessageTooLong)?;

    if data.len() > limit {
        return Err(Error::MessageTooLong);
    }

    pkcs1v15::sign(priv_key, &encode_envelope(data))
}

/// Verifies a signature produced by [`sign`] over `data`.
///
/// Returns `false`, never an error, when the signature length is wrong,
/// the public transform fails, the recovered envelope is malformed, the
/// length field disagrees with the enclosed byte count, or the enclosed
/// bytes differ from `data`.
pub fn verify(pub_key: &RsaPublicKey, data: &[u8], sig: &[u8]) -> bool {
    if sig.len() != pub_key.size() {
        return false;
    }

    let wrapped = match pkcs1v15::recover(pub_key, sig) {
        Ok(wrapped) => wrapped,
        Err(_) => return false,
    };

    match decode_envelope(&wrapped) {
        Some(payload) => payload.ct_eq(data).into(),
        None => false,
    }
}

fn encode_envelope(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + data.len());
    out.push(OCTET_STRING_TAG);
    match data.len() {
        0..=0x7f => out.push(data.len() as u8),
        0x80..=0xff => {
            out.push(0x81);
            out.push(data.len() as u8);
        }
        // The padding limit keeps payloads well below 2^16 for any
        // supported modulus size.
        _ => {
            out.push(0x82);
            out.push((data.len() >> 8) as u8);
            out.push((data.len() & 0xff) as u8);
        }
    }
    out.extend_from_slice(data);
    out
}

/// Splits a well-formed envelope into its payload. Rejects an unknown tag,
/// non-minimal length encodings and any disagreement between the length
/// field and the enclosed byte count.
fn decode_envelope(buf: &[u8]) -> Option<&[u8]> {
    let (&tag, rest) = buf.split_first()?;
    if tag != OCTET_STRING_TAG {
        return None;
    }

    let (&l0, rest) = rest.split_first()?;
    let (len, rest) = match l0 {
        0..=0x7f => (usize::from(l0), rest),
        0x81 => {
            let (&l1, rest) = rest.split_first()?;
            if l1 < 0x80 {
                return None;
            }
            (usize::from(l1), rest)
        }
        0x82 => {
            let (&hi, rest) = rest.split_first()?;
            let (&lo, rest) = rest.split_first()?;
            let len = usize::from(hi) << 8 | usize::from(lo);
            if len <= 0xff {
                return None;
            }
            (len, rest)
        }
        _ => return None,
    };

    (rest.len() == len).then_some(rest)
}
