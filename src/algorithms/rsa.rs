//! Generic RSA implementation

use num_bigint::{BigUint, IntoBigInt, IntoBigUint, ToBigInt};
use num_traits::{Signed, Zero};
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Raw RSA encryption of m with the public key. No padding is performed.
#[inline]
pub(crate) fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> Result<BigUint> {
    Ok(m.modpow(key.e(), key.n()))
}

/// Performs raw RSA decryption with no padding.
///
/// Uses the CRT factors when the key carries them, the private exponent
/// otherwise. Every failure mode reports the same generic error.
#[inline]
pub(crate) fn rsa_decrypt(priv_key: &impl PrivateKeyParts, c: &BigUint) -> Result<BigUint> {
    if c >= priv_key.n() {
        return Err(Error::Decryption);
    }

    if priv_key.n().is_zero() {
        return Err(Error::Decryption);
    }

    let m = match (
        priv_key.p(),
        priv_key.q(),
        priv_key.dp(),
        priv_key.dq(),
        priv_key.qinv(),
    ) {
        (Some(p), Some(q), Some(dp), Some(dq), Some(qinv)) => {
            // Garner recombination over the two factors:
            //   m1 = c^dp mod p, m2 = c^dq mod q
            //   h  = qinv * (m1 - m2) mod p
            //   m  = m2 + h * q
            let mut m1 = c.modpow(dp, p).into_bigint().unwrap();
            let mut m2 = c.modpow(dq, q).into_bigint().unwrap();

            let mut p_int = p.to_bigint().unwrap();
            let mut q_int = q.to_bigint().unwrap();
            let mut qinv_int = qinv.to_bigint().unwrap();

            m1 -= &m2;
            while m1.is_negative() {
                m1 += &p_int;
            }
            m1 *= &qinv_int;
            m1 %= &p_int;
            m1 *= &q_int;
            m1 += &m2;

            // clear tmp values
            m2.zeroize();
            p_int.zeroize();
            q_int.zeroize();
            qinv_int.zeroize();

            m1.into_biguint().expect("failed to decrypt")
        }
        _ => match priv_key.d() {
            Some(d) => c.modpow(d, priv_key.n()),
            None => return Err(Error::MissingPrivateKey),
        },
    };

    Ok(m)
}

/// Performs raw RSA decryption with no padding.
///
/// In order to defend against errors in the CRT computation, m^e is
/// calculated and compared against the original ciphertext; a mismatch
/// reports the same generic error as any other decryption failure.
#[inline]
pub(crate) fn rsa_decrypt_and_check(
    priv_key: &impl PrivateKeyParts,
    c: &BigUint,
) -> Result<BigUint> {
    let m = rsa_decrypt(priv_key, c)?;

    let check = rsa_encrypt(priv_key, &m)?;

    if c != &check {
        return Err(Error::Decryption);
    }

    Ok(m)
}
