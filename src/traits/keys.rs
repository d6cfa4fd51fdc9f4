//! Traits related to the key components.

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Raw signatures and ciphertexts for
    /// or by this public key will have the same size.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Components of an RSA private key.
///
/// A key holds the private exponent, the CRT factor quintuple, or both.
/// Accessors return `None` for whichever group is absent.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key, if present.
    fn d(&self) -> Option<&BigUint>;

    /// Returns the first prime factor, if present.
    fn p(&self) -> Option<&BigUint>;

    /// Returns the second prime factor, if present.
    fn q(&self) -> Option<&BigUint>;

    /// Returns the exponent for the first factor, `d mod (p-1)`, if present.
    fn dp(&self) -> Option<&BigUint>;

    /// Returns the exponent for the second factor, `d mod (q-1)`, if present.
    fn dq(&self) -> Option<&BigUint>;

    /// Returns the CRT coefficient, `q^-1 mod p`, if present.
    fn qinv(&self) -> Option<&BigUint>;
}
