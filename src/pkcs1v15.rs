//! Encryption and decryption using PKCS#1 v1.5 padding, plus the raw
//! signing-direction transforms used beneath the octet-string signature
//! wrapper.

use alloc::vec::Vec;

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::pad::{uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::algorithms::pkcs1v15::{
    pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad, pkcs1v15_sign_pad, pkcs1v15_sign_unpad,
};
use crate::algorithms::rsa::{rsa_decrypt_and_check, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::key::{self, RsaPrivateKey, RsaPublicKey};
use crate::traits::{PaddingScheme, PublicKeyParts};

/// Bytes of overhead a PKCS#1 v1.5 padded block carries: two header bytes,
/// at least eight padding octets and the zero separator.
pub const PADDING_SIZE: usize = 11;

/// Encryption using PKCS#1 v1.5 padding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pkcs1v15Encrypt;

impl PaddingScheme for Pkcs1v15Encrypt {
    fn decrypt(self, priv_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(priv_key, ciphertext)
    }

    fn encrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: &mut Rng,
        pub_key: &RsaPublicKey,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        encrypt(rng, pub_key, msg)
    }
}

/// Encrypts the given message with RSA and the padding scheme from
/// PKCS#1 v1.5. The message must be no longer than the length of the public
/// modulus minus [`PADDING_SIZE`] bytes. The ciphertext is always exactly
/// the size of the modulus.
#[inline]
pub fn encrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    pub_key: &RsaPublicKey,
    msg: &[u8],
) -> Result<Vec<u8>> {
    key::check_public(pub_key)?;

    let em = pkcs1v15_encrypt_pad(rng, msg, pub_key.size())?;
    let int = Zeroizing::new(BigUint::from_bytes_be(&em));
    uint_to_be_pad(rsa_encrypt(pub_key, &int)?, pub_key.size())
}

/// Decrypts a ciphertext using RSA and the padding scheme from PKCS#1 v1.5.
///
/// The ciphertext must be exactly the size of the modulus and numerically
/// smaller than it. Note that whether this function returns an error or not
/// discloses secret information. If an attacker can cause this function to
/// run repeatedly and learn whether each instance returned an error then
/// they can decrypt and forge signatures as if they had the private key.
#[inline]
pub fn decrypt(priv_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    key::check_public(priv_key)?;

    let k = priv_key.size();
    if ciphertext.len() != k {
        return Err(Error::Decryption);
    }

    let int = Zeroizing::new(BigUint::from_bytes_be(ciphertext));
    let em = uint_to_zeroizing_be_pad(rsa_decrypt_and_check(priv_key, &int)?, k)?;

    pkcs1v15_encrypt_unpad(em, k)
}

/// Applies the signing-direction transform to the given payload: the
/// payload is padded under block type 01 and raised to the private
/// exponent. The payload must be no longer than the length of the public
/// modulus minus [`PADDING_SIZE`] bytes.
///
/// This function is deterministic; it consumes no randomness.
#[inline]
pub fn sign(priv_key: &RsaPrivateKey, msg: &[u8]) -> Result<Vec<u8>> {
    key::check_public(priv_key)?;

    let em = Zeroizing::new(pkcs1v15_sign_pad(msg, priv_key.size())?);
    let int = Zeroizing::new(BigUint::from_bytes_be(&em));
    uint_to_zeroizing_be_pad(rsa_decrypt_and_check(priv_key, &int)?, priv_key.size())
}

/// Recovers the payload embedded in a signature produced by [`sign`]: the
/// signature is raised to the public exponent and the block type 01 padding
/// removed. The signature must be exactly the size of the modulus and
/// numerically smaller than it.
#[inline]
pub fn recover(pub_key: &RsaPublicKey, sig: &[u8]) -> Result<Vec<u8>> {
    key::check_public(pub_key)?;

    let k = pub_key.size();
    if sig.len() != k {
        return Err(Error::Verification);
    }

    let int = BigUint::from_bytes_be(sig);
    if &int >= pub_key.n() {
        return Err(Error::Verification);
    }

    let em = uint_to_be_pad(rsa_encrypt(pub_key, &int)?, k)?;
    pkcs1v15_sign_unpad(&em, k)
}
