#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Supported operations
//!
//! This crate implements the RSA encryption and signature primitives over
//! externally supplied key components:
//!
//! - [PKCS#1 v1.5 encryption](#pkcs1-v15-encryption)
//! - [OAEP encryption](#oaep-encryption)
//! - [Octet-string signatures](#octet-string-signatures)
//! - [Security-level estimation](#security-level-estimation)
//!
//! Key generation, DER/PEM encoding and certificate handling are out of
//! scope; keys are assembled from big-endian integer components via
//! [`RsaPublicKey::new`] and [`RsaPrivateKey::from_components`].
//!
//! # Usage
//!
//! ## PKCS#1 v1.5 encryption
//!
//! ```
//! use rsa_core::{BigUint, Pkcs1v15Encrypt, RsaPrivateKey};
//! use hex_literal::hex;
//!
//! // 400-bit key from the PKCS#1 v1.5 example vectors.
//! let n = BigUint::from_bytes_be(&hex!(
//!     "00a3079a90df0dfd72ac090ccc2a78b87413133e40759c98faf8204f358a0b26"
//!     "3c6770e783a93b6971b73779d2717be83477cf"
//! ));
//! let e = BigUint::from_bytes_be(&hex!("03"));
//! let d = BigUint::from_bytes_be(&hex!(
//!     "6cafbc6094b3fe4c72b0b332c6fb25a2b76229804e6865fca45a74df0f8fb841"
//!     "3b52c0d0e53d9b590ff19be79f49dd21e5eb"
//! ));
//!
//! let private_key = RsaPrivateKey::from_components(n, e, Some(d), None).unwrap();
//! let public_key = private_key.to_public_key();
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! // Encrypt
//! let data = b"hello world";
//! let enc_data = public_key
//!     .encrypt(&mut rng, Pkcs1v15Encrypt, &data[..])
//!     .expect("failed to encrypt");
//! assert_ne!(&data[..], &enc_data[..]);
//!
//! // Decrypt
//! let dec_data = private_key
//!     .decrypt(Pkcs1v15Encrypt, &enc_data)
//!     .expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! ## OAEP encryption
//!
//! Note: requires the `sha1` feature of the `rsa-core` crate (or any other
//! digest implementing [`digest::DynDigest`]).
//!
#![cfg_attr(feature = "sha1", doc = "```")]
#![cfg_attr(not(feature = "sha1"), doc = "```ignore")]
//! use rsa_core::{BigUint, CrtComponents, Oaep, RsaPrivateKey, sha1::Sha1};
//! use hex_literal::hex;
//!
//! // 512-bit key from the PKCS#1 example vectors, CRT form.
//! let n = BigUint::from_bytes_be(&hex!(
//!     "00aa36abce88acfdff55523c7fc4523f90efa00df3774a259f2e62b4c5d99cb5"
//!     "adb300a0285e5301930e0c70fb6876939ce616ce624a11e0086d341ebcaca0a1f5"
//! ));
//! let e = BigUint::from_bytes_be(&hex!("11"));
//! let crt = CrtComponents::new(
//!     BigUint::from_bytes_be(&hex!(
//!         "00d840b41666b42e92ea0da3b43204b5cfce3352524d0416a5a441e700af46120d"
//!     )),
//!     BigUint::from_bytes_be(&hex!(
//!         "00c97fb1f027f453f6341233eaaad1d9353f6c42d08866b1d05a0f2035028b9d89"
//!     )),
//!     BigUint::from_bytes_be(&hex!(
//!         "590b9572a2c2a9c406059dc2ab2f1dafeb7e8b4f10a7549e8eedf5b4fce09e05"
//!     )),
//!     BigUint::from_bytes_be(&hex!(
//!         "008e3c0521fe15e0ea06a36ff0f10c9952c35b7a7514fd3238b80aad5298628d51"
//!     )),
//!     BigUint::from_bytes_be(&hex!(
//!         "363ff7189da8e90b1d341f71d09b76a8a943e11d10b24d249f2deafef80c1826"
//!     )),
//! );
//! let private_key = RsaPrivateKey::from_components(n, e, None, Some(crt)).unwrap();
//! let public_key = private_key.to_public_key();
//!
//! let mut rng = rand::thread_rng();
//!
//! let data = b"hello world";
//! let enc_data = public_key
//!     .encrypt(&mut rng, Oaep::new::<Sha1>(), &data[..])
//!     .expect("failed to encrypt");
//!
//! let dec_data = private_key
//!     .decrypt(Oaep::new::<Sha1>(), &enc_data)
//!     .expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! ## Octet-string signatures
//!
//! ```
//! use rsa_core::{octet_string, BigUint, RsaPrivateKey};
//! use hex_literal::hex;
//!
//! # let n = BigUint::from_bytes_be(&hex!(
//! #     "00a3079a90df0dfd72ac090ccc2a78b87413133e40759c98faf8204f358a0b26"
//! #     "3c6770e783a93b6971b73779d2717be83477cf"
//! # ));
//! # let e = BigUint::from_bytes_be(&hex!("03"));
//! # let d = BigUint::from_bytes_be(&hex!(
//! #     "6cafbc6094b3fe4c72b0b332c6fb25a2b76229804e6865fca45a74df0f8fb841"
//! #     "3b52c0d0e53d9b590ff19be79f49dd21e5eb"
//! # ));
//! let private_key = RsaPrivateKey::from_components(n, e, Some(d), None).unwrap();
//! let public_key = private_key.to_public_key();
//!
//! let data = b"attested bytes";
//! let signature = octet_string::sign(&private_key, data).unwrap();
//! assert!(octet_string::verify(&public_key, data, &signature));
//! assert!(!octet_string::verify(&public_key, b"other bytes", &signature));
//! ```
//!
//! ## Security-level estimation
//!
//! ```
//! use rsa_core::security;
//!
//! assert_eq!(security::security_bits(2048), 112);
//! assert_eq!(security::security_bits(3072), 128);
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod oaep;
pub mod octet_string;
pub mod pkcs1v15;
pub mod security;
pub mod traits;

mod key;

#[cfg(feature = "sha1")]
pub use sha1;
#[cfg(feature = "sha2")]
pub use sha2;

pub use crate::{
    errors::{Error, Result},
    key::{CrtComponents, RsaPrivateKey, RsaPublicKey},
    oaep::Oaep,
    pkcs1v15::Pkcs1v15Encrypt,
};
