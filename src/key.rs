//! RSA key types.
//!
//! Keys are assembled from externally supplied components (big-endian
//! unsigned integers); no generation or encoding happens here. A private key
//! carries the private exponent, the CRT factor quintuple, or both. The
//! quintuple enables the faster CRT decryption path.

use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::security;
use crate::traits::{PaddingScheme, PrivateKeyParts, PublicKeyParts};

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus: product of prime numbers `p` and `q`
    n: BigUint,
    /// Public exponent: power to which a plaintext message is raised in
    /// order to encrypt it.
    e: BigUint,
}

impl Hash for RsaPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Domain separator for hashing purposes
        "RsaPublicKey".hash(state);
        self.n.hash(state);
        self.e.hash(state);
    }
}

/// Represents a whole RSA key, public and private parts.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    /// Public components of the private key.
    pubkey_components: RsaPublicKey,
    /// Private exponent.
    d: Option<BigUint>,
    /// CRT factors of the key, when supplied by the key loader.
    crt: Option<CrtComponents>,
}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &RsaPrivateKey) -> bool {
        self.pubkey_components == other.pubkey_components
            && self.d == other.d
            && self.crt == other.crt
    }
}

impl Eq for RsaPrivateKey {}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        if let Some(d) = self.d.as_mut() {
            d.zeroize();
        }
        self.d = None;
        if let Some(crt) = self.crt.as_mut() {
            crt.zeroize();
        }
        self.crt = None;
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Deref for RsaPrivateKey {
    type Target = RsaPublicKey;
    fn deref(&self) -> &RsaPublicKey {
        &self.pubkey_components
    }
}

/// The CRT factor quintuple of an RSA private key: the two primes together
/// with the reduced exponents and coefficient used by the CRT decryption
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtComponents {
    /// First prime factor of the modulus.
    pub(crate) p: BigUint,
    /// Second prime factor of the modulus.
    pub(crate) q: BigUint,
    /// `d mod (p-1)`
    pub(crate) dp: BigUint,
    /// `d mod (q-1)`
    pub(crate) dq: BigUint,
    /// `q^-1 mod p`
    pub(crate) qinv: BigUint,
}

impl CrtComponents {
    /// Assembles the quintuple from externally supplied values. The values
    /// are taken on trust; an inconsistent quintuple surfaces as a generic
    /// decryption failure when the key is used.
    pub fn new(p: BigUint, q: BigUint, dp: BigUint, dq: BigUint, qinv: BigUint) -> CrtComponents {
        CrtComponents { p, q, dp, dq, qinv }
    }
}

impl Zeroize for CrtComponents {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl Drop for CrtComponents {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.pubkey_components.clone()
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> Option<&BigUint> {
        self.d.as_ref()
    }

    fn p(&self) -> Option<&BigUint> {
        self.crt.as_ref().map(|crt| &crt.p)
    }

    fn q(&self) -> Option<&BigUint> {
        self.crt.as_ref().map(|crt| &crt.q)
    }

    fn dp(&self) -> Option<&BigUint> {
        self.crt.as_ref().map(|crt| &crt.dp)
    }

    fn dq(&self) -> Option<&BigUint> {
        self.crt.as_ref().map(|crt| &crt.dq)
    }

    fn qinv(&self) -> Option<&BigUint> {
        self.crt.as_ref().map(|crt| &crt.qinv)
    }
}

impl RsaPublicKey {
    /// Minimum value of the public exponent `e`.
    pub const MIN_PUB_EXPONENT: u64 = 2;

    /// Maximum value of the public exponent `e`.
    pub const MAX_PUB_EXPONENT: u64 = (1 << 33) - 1;

    /// Maximum size of the modulus `n` in bits.
    pub const MAX_SIZE: usize = 4096;

    /// Create a new public key from its components.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        let k = RsaPublicKey { n, e };
        check_public(&k)?;
        Ok(k)
    }

    /// Encrypt the given message using the supplied padding scheme.
    pub fn encrypt<R: CryptoRngCore + ?Sized, P: PaddingScheme>(
        &self,
        rng: &mut R,
        padding: P,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        padding.encrypt(rng, self, msg)
    }

    /// Returns the equivalent symmetric security level of the modulus, in
    /// bits. See [`security::security_bits`].
    pub fn security_bits(&self) -> u32 {
        security::security_bits(self.n.bits())
    }
}

impl RsaPrivateKey {
    /// Constructs an RSA key pair from its components.
    ///
    /// At least one of the private exponent `d` and the CRT quintuple must
    /// be supplied; `Error::MissingPrivateKey` is returned otherwise. When
    /// the quintuple is present decryption uses the CRT path, whether or
    /// not `d` is also present.
    pub fn from_components(
        n: BigUint,
        e: BigUint,
        d: Option<BigUint>,
        crt: Option<CrtComponents>,
    ) -> Result<RsaPrivateKey> {
        if d.is_none() && crt.is_none() {
            return Err(Error::MissingPrivateKey);
        }

        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey::new(n, e)?,
            d,
            crt,
        })
    }

    /// Get the public key from the private key, cloning `n` and `e`.
    ///
    /// Generally this is not needed since `RsaPrivateKey` implements the
    /// `PublicKeyParts` trait, but it can occasionally be useful to discard
    /// the private information entirely.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.pubkey_components.clone()
    }

    /// Decrypt the given ciphertext using the supplied padding scheme.
    pub fn decrypt<P: PaddingScheme>(&self, padding: P, ciphertext: &[u8]) -> Result<Vec<u8>> {
        padding.decrypt(self, ciphertext)
    }
}

/// Check that the public key is well formed and has an exponent within
/// acceptable bounds.
#[inline]
pub(crate) fn check_public(public_key: &impl PublicKeyParts) -> Result<()> {
    if public_key.n().bits() > RsaPublicKey::MAX_SIZE {
        return Err(Error::ModulusTooLarge);
    }

    let e = public_key
        .e()
        .to_u64()
        .ok_or(Error::PublicExponentTooLarge)?;

    if e < RsaPublicKey::MIN_PUB_EXPONENT {
        return Err(Error::PublicExponentTooSmall);
    }

    if e > RsaPublicKey::MAX_PUB_EXPONENT {
        return Err(Error::PublicExponentTooLarge);
    }

    Ok(())
}
