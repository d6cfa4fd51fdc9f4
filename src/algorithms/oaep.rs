//! OAEP block encoding as described in [RFC8017 § 7.1].
//!
//! [RFC8017 § 7.1]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.1

use alloc::string::String;
use alloc::vec::Vec;

use digest::DynDigest;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroizing;

use super::mgf::mgf1_xor;
use crate::errors::{Error, Result};

// 2**61 - 1, the label limit for SHA-1; RFC 8017 leaves the limits for other
// hash functions unstated, so the SHA-1 bound is applied across the board.
const MAX_LABEL_LEN: u64 = 2_305_843_009_213_693_951;

/// Builds the padded OAEP block for the given message.
///
/// The message must be no longer than the length of the public modulus minus
/// `2 + (2 * hash.size())`.
#[inline]
pub(crate) fn oaep_encrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    msg: &[u8],
    digest: &mut dyn DynDigest,
    mgf_digest: &mut dyn DynDigest,
    label: Option<String>,
    k: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let h_size = digest.output_size();

    if msg.len() + 2 * h_size + 2 > k {
        return Err(Error::MessageTooLong);
    }

    let label = label.unwrap_or_default();
    if label.len() as u64 > MAX_LABEL_LEN {
        return Err(Error::LabelTooLong);
    }

    let mut em = Zeroizing::new(vec![0u8; k]);

    let (_, payload) = em.split_at_mut(1);
    let (seed, db) = payload.split_at_mut(h_size);
    rng.fill_bytes(seed);

    // DB = lHash || PS || 0x01 || M
    let db_len = k - h_size - 1;

    digest.update(label.as_bytes());
    let l_hash = digest.finalize_reset();
    db[0..h_size].copy_from_slice(&l_hash);
    db[db_len - msg.len() - 1] = 1;
    db[db_len - msg.len()..].copy_from_slice(msg);

    mgf1_xor(db, mgf_digest, seed);
    mgf1_xor(seed, mgf_digest, db);

    Ok(em)
}

/// Removes the OAEP padding from a decrypted block.
///
/// Note that whether this function returns an error or not discloses secret
/// information. If an attacker can cause this function to run repeatedly and
/// learn whether each instance returned an error then they can decrypt and
/// forge signatures as if they had the private key.
#[inline]
pub(crate) fn oaep_decrypt(
    em: &mut [u8],
    digest: &mut dyn DynDigest,
    mgf_digest: &mut dyn DynDigest,
    label: Option<String>,
    k: usize,
) -> Result<Vec<u8>> {
    let h_size = digest.output_size();

    if k < 2 * h_size + 2 {
        return Err(Error::Decryption);
    }

    let label = label.unwrap_or_default();
    if label.len() as u64 > MAX_LABEL_LEN {
        return Err(Error::Decryption);
    }

    digest.update(label.as_bytes());
    let expected_l_hash = digest.finalize_reset();

    let res = decrypt_inner(em, h_size, &expected_l_hash, mgf_digest)?;
    if res.is_none().into() {
        return Err(Error::Decryption);
    }

    let (out, index) = res.unwrap();
    Ok(out[index as usize..].to_vec())
}

/// Unmasks the block and scans its structure, accumulating validity as a
/// `Choice`. The scan always covers the full data block no matter where a
/// mismatch first appears.
#[inline]
fn decrypt_inner(
    em: &mut [u8],
    h_size: usize,
    expected_l_hash: &[u8],
    mgf_digest: &mut dyn DynDigest,
) -> Result<CtOption<(Vec<u8>, u32)>> {
    let first_byte_is_zero = em[0].ct_eq(&0u8);

    let (_, payload) = em.split_at_mut(1);
    let (seed, db) = payload.split_at_mut(h_size);

    mgf1_xor(seed, mgf_digest, db);
    mgf1_xor(db, mgf_digest, seed);

    let hash_are_equal = db[0..h_size].ct_eq(expected_l_hash);

    // The remainder of the data block must be zero or more 0x00, followed
    // by 0x01, followed by the message.
    //   looking_for_index: 1 if we are still looking for the 0x01
    //   index: the offset of the first 0x01 byte
    //   nonzero_before_one: 1 if we saw a non-zero byte before the 1
    let mut looking_for_index = Choice::from(1u8);
    let mut index = 0u32;
    let mut nonzero_before_one = Choice::from(0u8);

    for (i, el) in db.iter().skip(h_size).enumerate() {
        let equals0 = el.ct_eq(&0u8);
        let equals1 = el.ct_eq(&1u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals1);
        looking_for_index &= !equals1;
        nonzero_before_one |= looking_for_index & !equals0;
    }

    let valid = first_byte_is_zero & hash_are_equal & !nonzero_before_one & !looking_for_index;

    Ok(CtOption::new(
        (em.to_vec(), index + 2 + (h_size * 2) as u32),
        valid,
    ))
}
