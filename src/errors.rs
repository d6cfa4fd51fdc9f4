//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-core` [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Decryption error.
    ///
    /// Deliberately opaque: every way a ciphertext can fail to decode is
    /// collapsed into this one value so that callers (and attackers able to
    /// observe them) cannot distinguish a padding failure from a range or
    /// wrong-key failure.
    Decryption,

    /// Verification error.
    Verification,

    /// Message too long.
    MessageTooLong,

    /// The key carries neither a private exponent nor the CRT factors.
    MissingPrivateKey,

    /// Modulus too large.
    ModulusTooLarge,

    /// Public exponent too small.
    PublicExponentTooSmall,

    /// Public exponent too large.
    PublicExponentTooLarge,

    /// Invalid padding length.
    InvalidPadLen,

    /// Label too long.
    LabelTooLong,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Decryption => write!(f, "decryption error"),
            Error::Verification => write!(f, "verification error"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::MissingPrivateKey => write!(f, "no private exponent or CRT factors"),
            Error::ModulusTooLarge => write!(f, "modulus too large"),
            Error::PublicExponentTooSmall => write!(f, "public exponent too small"),
            Error::PublicExponentTooLarge => write!(f, "public exponent too large"),
            Error::InvalidPadLen => write!(f, "invalid padding length"),
            Error::LabelTooLong => write!(f, "label too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
