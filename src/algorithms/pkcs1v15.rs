//! PKCS#1 v1.5 block encoding as described in [RFC8017 § 7.2 and § 8.2].
//!
//! Both block types are implemented: type 02 (random padding string, used
//! for encryption) and type 01 (0xFF padding string, used for the signing
//! direction).
//!
//! [RFC8017 § 7.2 and § 8.2]: https://datatracker.ietf.org/doc/html/rfc8017

use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
#[inline]
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);

    for el in data {
        while *el == 0u8 {
            rng.fill_bytes(core::slice::from_mut(el));
        }
    }
}

/// Applies the padding scheme from PKCS#1 v1.5 for encryption. The message
/// must be no longer than the length of the public modulus minus 11 bytes.
pub(crate) fn pkcs1v15_encrypt_pad<R>(
    rng: &mut R,
    msg: &[u8],
    k: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    R: CryptoRngCore + ?Sized,
{
    if msg.len() + 11 > k {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x02 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![0u8; k]);
    em[1] = 2;
    non_zero_random_bytes(rng, &mut em[2..k - msg.len() - 1]);
    em[k - msg.len() - 1] = 0;
    em[k - msg.len()..].copy_from_slice(msg);
    Ok(em)
}

/// Removes the encryption padding scheme from PKCS#1 v1.5.
///
/// Note that whether this function returns an error or not discloses secret
/// information. If an attacker can cause this function to run repeatedly and
/// learn whether each instance returned an error then they can decrypt and
/// forge signatures as if they had the private key.
#[inline]
pub(crate) fn pkcs1v15_encrypt_unpad(em: Vec<u8>, k: usize) -> Result<Vec<u8>> {
    let res = decrypt_inner(em, k)?;
    if res.is_none().into() {
        return Err(Error::Decryption);
    }

    let (out, index) = res.unwrap();
    Ok(out[index as usize..].to_vec())
}

/// Removes the PKCS#1 v1.5 encryption padding. Validity is accumulated as a
/// `Choice` over a scan of the whole block so that memory access patterns do
/// not depend on where (or whether) the structure check fails; the block and
/// the message offset are only split apart by the caller once the combined
/// verdict is known.
#[inline]
fn decrypt_inner(em: Vec<u8>, k: usize) -> Result<CtOption<(Vec<u8>, u32)>> {
    if k < 11 {
        return Err(Error::Decryption);
    }

    let first_byte_is_zero = em[0].ct_eq(&0u8);
    let second_byte_is_two = em[1].ct_eq(&2u8);

    // The remainder of the block must be a string of non-zero random
    // octets, followed by a 0, followed by the message.
    //   looking_for_index: 1 iff we are still looking for the zero.
    //   index: the offset of the first zero byte.
    let mut looking_for_index = Choice::from(1u8);
    let mut index = 0u32;

    for (i, el) in em.iter().enumerate().skip(2) {
        let equals0 = el.ct_eq(&0u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals0);
        looking_for_index &= !equals0;
    }

    // The padding string must be at least 8 bytes long, and it starts two
    // bytes into em.
    let valid_ps = Choice::from((((2i32 + 8i32 - index as i32 - 1i32) >> 31) & 1) as u8);
    let valid = first_byte_is_zero & second_byte_is_two & !looking_for_index & valid_ps;
    index = u32::conditional_select(&0, &(index + 1), valid);

    Ok(CtOption::new((em, index), valid))
}

/// Applies the padding scheme from PKCS#1 v1.5 for the signing direction
/// (block type 01). The payload must be no longer than the length of the
/// public modulus minus 11 bytes.
#[inline]
pub(crate) fn pkcs1v15_sign_pad(msg: &[u8], k: usize) -> Result<Vec<u8>> {
    if msg.len() + 11 > k {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || M
    let mut em = vec![0xff; k];
    em[0] = 0;
    em[1] = 1;
    em[k - msg.len() - 1] = 0;
    em[k - msg.len()..].copy_from_slice(msg);

    Ok(em)
}

/// Removes the signing-direction padding, returning the embedded payload.
///
/// The block recovered from a signature with the public key is public data,
/// so this scan runs in variable time.
#[inline]
pub(crate) fn pkcs1v15_sign_unpad(em: &[u8], k: usize) -> Result<Vec<u8>> {
    if k < 11 || em.len() != k {
        return Err(Error::Verification);
    }

    if em[0] != 0x00 || em[1] != 0x01 {
        return Err(Error::Verification);
    }

    // PS is at least eight 0xff octets, terminated by a single zero.
    let mut sep = 2;
    while sep < k && em[sep] == 0xff {
        sep += 1;
    }
    if sep < 10 || sep == k || em[sep] != 0x00 {
        return Err(Error::Verification);
    }

    Ok(em[sep + 1..].to_vec())
}
