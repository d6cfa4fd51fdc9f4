//! PKCS#1 v1.5 encryption tests over the classic PKCS#1 example keys.

use hex_literal::hex;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rand_core::RngCore;
use rsa_core::traits::PublicKeyParts;
use rsa_core::{BigUint, CrtComponents, Error, Pkcs1v15Encrypt, RsaPrivateKey};

const PTEXT_EX: [u8; 8] = hex!("54859b342c49ea2a");

fn key1_parts() -> (BigUint, BigUint, BigUint, CrtComponents) {
    let n = BigUint::from_bytes_be(&hex!(
        "00aa36abce88acfdff55523c7fc4523f90efa00df3774a259f2e62b4c5d99cb5"
        "adb300a0285e5301930e0c70fb6876939ce616ce624a11e0086d341ebcaca0a1f5"
    ));
    let e = BigUint::from_bytes_be(&hex!("11"));
    let d = BigUint::from_bytes_be(&hex!(
        "0a033748626487695f5f30bc38b98b44c2cd2dff434098cd20d8a138d090bf64"
        "797c3fa7a2cdcb3cd1e0bdba2654b4f9df8e8ae59d733d9f33b301624afd1d51"
    ));
    let crt = CrtComponents::new(
        BigUint::from_bytes_be(&hex!(
            "00d840b41666b42e92ea0da3b43204b5cfce3352524d0416a5a441e700af46120d"
        )),
        BigUint::from_bytes_be(&hex!(
            "00c97fb1f027f453f6341233eaaad1d9353f6c42d08866b1d05a0f2035028b9d89"
        )),
        BigUint::from_bytes_be(&hex!(
            "590b9572a2c2a9c406059dc2ab2f1dafeb7e8b4f10a7549e8eedf5b4fce09e05"
        )),
        BigUint::from_bytes_be(&hex!(
            "008e3c0521fe15e0ea06a36ff0f10c9952c35b7a7514fd3238b80aad5298628d51"
        )),
        BigUint::from_bytes_be(&hex!(
            "363ff7189da8e90b1d341f71d09b76a8a943e11d10b24d249f2deafef80c1826"
        )),
    );
    (n, e, d, crt)
}

fn key1() -> RsaPrivateKey {
    let (n, e, d, crt) = key1_parts();
    RsaPrivateKey::from_components(n, e, Some(d), Some(crt)).unwrap()
}

fn key2() -> RsaPrivateKey {
    let n = BigUint::from_bytes_be(&hex!(
        "00a3079a90df0dfd72ac090ccc2a78b87413133e40759c98faf8204f358a0b26"
        "3c6770e783a93b6971b73779d2717be83477cf"
    ));
    let e = BigUint::from_bytes_be(&hex!("03"));
    let d = BigUint::from_bytes_be(&hex!(
        "6cafbc6094b3fe4c72b0b332c6fb25a2b76229804e6865fca45a74df0f8fb841"
        "3b52c0d0e53d9b590ff19be79f49dd21e5eb"
    ));
    let crt = CrtComponents::new(
        BigUint::from_bytes_be(&hex!("00cf2035028b9d869840b41666b42e92ea0da3b43204b5cfce91")),
        BigUint::from_bytes_be(&hex!("00c97fb1f027f453f6341233eaaad1d9353f6c42d08866b1d05f")),
        BigUint::from_bytes_be(&hex!("008a1578ac5d13af102b22b999cd7461f15e6d22cc0323dfdf0b")),
        BigUint::from_bytes_be(&hex!("008655214ac54d8d4ecd6177f1c73690ce2a482c8b0599cbe03f")),
        BigUint::from_bytes_be(&hex!("0083efefb8a9a40d1db6ed98ad84ed1335dcc108f322d057cf8d")),
    );
    RsaPrivateKey::from_components(n, e, Some(d), Some(crt)).unwrap()
}

fn key3() -> RsaPrivateKey {
    let n = BigUint::from_bytes_be(&hex!(
        "00bbf82f090682ce9c2338ac2b9da871f7368d07eed41043a440d6b6f07454f5"
        "1fb8dfbaaf035c02ab61ea48ceeb6fcd4876ed520d60e1ec4619719d8a5b8b80"
        "7fafb8e0a3dfc737723ee6b4b7d93a2584ee6a649d060953748834b245459839"
        "4ee0aab12d7b61a51f527a9a41f6c1687fe2537298ca2a8f5946f8e5fd091dbdcb"
    ));
    let e = BigUint::from_bytes_be(&hex!("11"));
    let d = BigUint::from_bytes_be(&hex!(
        "00a5dafc5341faf289c4b988db30c1cdf83f31251e0668b42784813801579641"
        "b29410b3c7998d6bc465745e5c392669d6870da2c082a939e37fdcb82ec93eda"
        "c97ff3ad5950accfbc111c76f1a9529444e56aaf68c56c092cd38dc3bef5d20a"
        "939926ed4f74a13eddfbe1a1cecc4894af9428c2b7b8883fe4463a4bc85b1cb3c1"
    ));
    let crt = CrtComponents::new(
        BigUint::from_bytes_be(&hex!(
            "00eecfae81b1b9b3c908810b10a1b5600199eb9f44aef4fda493b81a9e3d84f6"
            "32124ef0236e5d1e3b7e28fae7aa040a2d5b252176459d1f397541ba2a58fb6599"
        )),
        BigUint::from_bytes_be(&hex!(
            "00c97fb1f027f453f6341233eaaad1d9353f6c42d08866b1d05a0f2035028b9d"
            "869840b41666b42e92ea0da3b43204b5cfce3352524d0416a5a441e700af461503"
        )),
        BigUint::from_bytes_be(&hex!(
            "54494ca63eba0337e4e24023fcd69a5aeb07dddc0183a4d0ac9b54b051f2b13e"
            "d9490975eab77414ff59c1f7692e9a2e202b38fc910a474174adc93c1f67c981"
        )),
        BigUint::from_bytes_be(&hex!(
            "471e0290ff0af0750351b7f878864ca961adbd3a8a7e991c5c0556a94c3146a7"
            "f9803f8f6f8ae342e931fd8ae47a220d1b99a495849807fe39f9245a9836da3d"
        )),
        BigUint::from_bytes_be(&hex!(
            "00b06c4fdabb6301198d265bdbae9423b380f271f73453885093077fcd39e211"
            "9fc98632154f5883b167a967bf402b4e9e2e0f9656e698ea3666edfb25798039f7"
        )),
    );
    RsaPrivateKey::from_components(n, e, Some(d), Some(crt)).unwrap()
}

#[test]
fn roundtrip_example_keys() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    for (i, priv_key) in [key1(), key2(), key3()].iter().enumerate() {
        let pub_key = priv_key.to_public_key();
        let k = pub_key.size();

        let ciphertext = pub_key
            .encrypt(&mut rng, Pkcs1v15Encrypt, &PTEXT_EX[..])
            .unwrap();
        assert_eq!(ciphertext.len(), k, "key{}", i + 1);
        assert_ne!(&ciphertext[..], &PTEXT_EX[..]);

        let plaintext = priv_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
        assert_eq!(plaintext, PTEXT_EX, "key{}", i + 1);
    }
}

#[test]
fn crt_and_exponent_paths_agree() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    let (n, e, d, crt) = key1_parts();
    let with_crt =
        RsaPrivateKey::from_components(n.clone(), e.clone(), None, Some(crt)).unwrap();
    let with_d = RsaPrivateKey::from_components(n, e, Some(d), None).unwrap();

    let ciphertext = with_crt
        .to_public_key()
        .encrypt(&mut rng, Pkcs1v15Encrypt, &PTEXT_EX[..])
        .unwrap();

    let via_crt = with_crt.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
    let via_d = with_d.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
    assert_eq!(via_crt, via_d);
    assert_eq!(via_crt, PTEXT_EX);
}

#[test]
fn roundtrip_many_sizes() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let priv_key = key1();
    let pub_key = priv_key.to_public_key();
    let k = priv_key.size();

    for i in 1..100 {
        let mut input = vec![0u8; i * 8];
        rng.fill_bytes(&mut input);
        if input.len() > k - 11 {
            input.truncate(k - 11);
        }

        let ciphertext = pub_key
            .encrypt(&mut rng, Pkcs1v15Encrypt, &input)
            .unwrap();
        assert_ne!(input, ciphertext);

        let plaintext = priv_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
        assert_eq!(input, plaintext);
    }
}

#[test]
fn message_over_limit_rejected() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let priv_key = key1();
    let pub_key = priv_key.to_public_key();
    let k = pub_key.size();

    let at_limit = vec![0xa5u8; k - 11];
    assert!(pub_key
        .encrypt(&mut rng, Pkcs1v15Encrypt, &at_limit)
        .is_ok());

    let over_limit = vec![0xa5u8; k - 10];
    assert_eq!(
        pub_key.encrypt(&mut rng, Pkcs1v15Encrypt, &over_limit).err(),
        Some(Error::MessageTooLong)
    );
}

#[test]
fn truncated_ciphertext_rejected() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let priv_key = key2();
    let ciphertext = priv_key
        .to_public_key()
        .encrypt(&mut rng, Pkcs1v15Encrypt, &PTEXT_EX[..])
        .unwrap();

    for cut in 0..ciphertext.len() {
        assert_eq!(
            priv_key
                .decrypt(Pkcs1v15Encrypt, &ciphertext[..cut])
                .err(),
            Some(Error::Decryption)
        );
    }
}
