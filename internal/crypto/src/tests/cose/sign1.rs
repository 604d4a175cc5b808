// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use mdoc_cbor::{decode_one, to_canonical_vec, ArrayBuilder, MapBuilder, Value};
use p256::{ecdsa::SigningKey, PublicKey};
use rand::rngs::OsRng;

use crate::{
    cose::{
        certificate_public_key, labels::X5CHAIN, parse_sign1, sign1, sign1_payload, verify1,
        verify1_with, x5chain_extract, CoseError, EcPublicKey,
    },
    raw_signature::{EcdsaSigner, EcdsaValidator, RawSignatureValidator, RawSigner, SigningAlg},
    session::generate_p256_keypair,
    tests::{full_chain, CHAIN_PEM, ES384_CERT_PEM, ES384_PRIVATE_KEY, LEAF_CERT, LEAF_PRIVATE_KEY},
};

fn leaf_signer() -> EcdsaSigner {
    EcdsaSigner::from_cert_chain_and_private_key(CHAIN_PEM, LEAF_PRIVATE_KEY, SigningAlg::Es256)
        .unwrap()
}

fn leaf_public_key() -> Vec<u8> {
    certificate_public_key(LEAF_CERT).unwrap()
}

#[test]
fn sign_and_verify_hello() {
    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();

    let parsed = parse_sign1(&envelope).unwrap();
    assert_eq!(parsed.protected, [0xa1, 0x01, 0x26]);
    assert_eq!(parsed.algorithm().unwrap().id(), -7);
    assert_eq!(parsed.payload.as_deref(), Some(&b"hello"[..]));
    assert_eq!(parsed.signature.len(), 64);
    assert!(parsed.unprotected.is_empty());

    assert!(verify1(&envelope, b"", &leaf_public_key()).unwrap());
}

#[test]
fn verify_with_different_key() {
    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();

    let (_, other_public) = generate_p256_keypair();
    let other_spki = EcPublicKey::from_p256(&other_public).to_spki_der().unwrap();

    assert!(!verify1(&envelope, b"", &other_spki).unwrap());
}

#[test]
fn payload_and_detached_content() {
    assert!(matches!(
        sign1(&leaf_signer(), b"hello", b"world", &[]),
        Err(CoseError::PayloadAndDetachedContent)
    ));

    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();
    assert!(matches!(
        verify1(&envelope, b"world", &leaf_public_key()),
        Err(CoseError::PayloadAndDetachedContent)
    ));
}

#[test]
fn detached_payload() {
    let envelope = sign1(&leaf_signer(), b"", b"detached content", &[]).unwrap();

    let value = decode_one(&envelope).unwrap();
    assert!(value.as_array().unwrap()[2].is_null());
    assert!(sign1_payload(&envelope).unwrap().is_empty());

    assert!(verify1(&envelope, b"detached content", &leaf_public_key()).unwrap());
    assert!(!verify1(&envelope, b"other content", &leaf_public_key()).unwrap());
}

#[test]
fn tampered_payload() {
    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();

    let mut sign1 = parse_sign1(&envelope).unwrap();
    sign1.payload = Some(b"jello".to_vec());
    let tampered = sign1.to_vec().unwrap();

    assert!(!verify1(&tampered, b"", &leaf_public_key()).unwrap());
}

#[test]
fn x5chain_forms() {
    let signer = leaf_signer();

    let none = sign1(&signer, b"hello", b"", &[]).unwrap();
    assert!(x5chain_extract(&none).unwrap().is_empty());

    let one = sign1(&signer, b"hello", b"", &[LEAF_CERT.to_vec()]).unwrap();
    let header = parse_sign1(&one).unwrap().unprotected;
    assert!(matches!(header.get(&Value::from(X5CHAIN)), Some(Value::Bytes(_))));
    assert_eq!(x5chain_extract(&one).unwrap(), vec![LEAF_CERT.to_vec()]);

    let many = sign1(&signer, b"hello", b"", &signer.cert_chain().unwrap()).unwrap();
    let header = parse_sign1(&many).unwrap().unprotected;
    assert!(matches!(header.get(&Value::from(X5CHAIN)), Some(Value::Array(_))));
    assert_eq!(x5chain_extract(&many).unwrap(), full_chain());

    let leaf = &x5chain_extract(&many).unwrap()[0];
    assert!(verify1(&many, b"", &certificate_public_key(leaf).unwrap()).unwrap());
}

#[test]
fn x5chain_of_wrong_type() {
    let envelope = ArrayBuilder::new()
        .push(vec![0xa1_u8, 0x01, 0x26])
        .push(MapBuilder::new().put(X5CHAIN, "not a certificate").build())
        .push(Value::Null)
        .push(vec![0u8; 64])
        .build();

    assert!(matches!(
        x5chain_extract(&to_canonical_vec(&envelope).unwrap()),
        Err(CoseError::MalformedEnvelope(_))
    ));
}

#[test]
fn es384_envelope() {
    let signer = EcdsaSigner::from_cert_chain_and_private_key(
        ES384_CERT_PEM,
        ES384_PRIVATE_KEY,
        SigningAlg::Es384,
    )
    .unwrap();
    let chain = signer.cert_chain().unwrap();

    let envelope = sign1(&signer, b"hello", b"", &chain).unwrap();
    let parsed = parse_sign1(&envelope).unwrap();
    assert_eq!(parsed.algorithm().unwrap().id(), -35);
    assert_eq!(parsed.signature.len(), 96);

    let public_key = certificate_public_key(&chain[0]).unwrap();
    assert!(verify1(&envelope, b"", &public_key).unwrap());
}

#[test]
fn es512_fails_closed() {
    let envelope = ArrayBuilder::new()
        .push(vec![0xa1_u8, 0x01, 0x38, 0x23])
        .push(MapBuilder::new().build())
        .push(b"hello".as_slice())
        .push(vec![1u8; 128])
        .build();
    let envelope = to_canonical_vec(&envelope).unwrap();

    assert!(matches!(
        verify1(&envelope, b"", &leaf_public_key()),
        Err(CoseError::UnsupportedAlgorithm(-36))
    ));
}

#[test]
fn unknown_algorithm() {
    let envelope = ArrayBuilder::new()
        .push(vec![0xa1_u8, 0x01, 0x27])
        .push(MapBuilder::new().build())
        .push(b"hello".as_slice())
        .push(vec![1u8; 64])
        .build();
    let envelope = to_canonical_vec(&envelope).unwrap();

    assert!(matches!(
        verify1(&envelope, b"", &leaf_public_key()),
        Err(CoseError::UnsupportedAlgorithm(-8))
    ));
}

#[test]
fn caller_supplied_validator() {
    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();

    let result = verify1_with(&envelope, b"", &leaf_public_key(), |alg| {
        assert_eq!(alg, SigningAlg::Es256);
        Some(Box::new(EcdsaValidator::Es256) as Box<dyn RawSignatureValidator>)
    });
    assert!(result.unwrap());

    assert!(matches!(
        verify1_with(&envelope, b"", &leaf_public_key(), |_| None),
        Err(CoseError::UnsupportedAlgorithm(-7))
    ));
}

#[test]
fn tagged_envelope() {
    let envelope = sign1(&leaf_signer(), b"hello", b"", &[]).unwrap();
    let tagged = to_canonical_vec(&Value::tagged(18, decode_one(&envelope).unwrap())).unwrap();
    assert!(verify1(&tagged, b"", &leaf_public_key()).unwrap());

    let wrong_tag = to_canonical_vec(&Value::tagged(17, decode_one(&envelope).unwrap())).unwrap();
    assert!(matches!(
        parse_sign1(&wrong_tag),
        Err(CoseError::MalformedEnvelope(_))
    ));
}

#[test]
fn malformed_envelopes() {
    let cases = [
        Value::from("not an array"),
        ArrayBuilder::new()
            .push(vec![0xa0_u8])
            .push(MapBuilder::new().build())
            .push(Value::Null)
            .build(),
        ArrayBuilder::new()
            .push("protected")
            .push(MapBuilder::new().build())
            .push(Value::Null)
            .push(vec![0u8; 64])
            .build(),
        ArrayBuilder::new()
            .push(vec![0xa1_u8, 0x01, 0x26])
            .push(MapBuilder::new().build())
            .push(7)
            .push(vec![0u8; 64])
            .build(),
        ArrayBuilder::new()
            .push(vec![0xa1_u8, 0x01, 0x26])
            .push(MapBuilder::new().build())
            .push(Value::Null)
            .push("signature")
            .build(),
        ArrayBuilder::new()
            .push(vec![0xa1_u8, 0x01, 0x26])
            .push(Value::Null)
            .push(Value::Null)
            .push(vec![0u8; 64])
            .build(),
    ];

    for case in cases {
        let bytes = to_canonical_vec(&case).unwrap();
        assert!(
            matches!(parse_sign1(&bytes), Err(CoseError::MalformedEnvelope(_))),
            "{case}"
        );
    }
}

#[test]
fn missing_algorithm() {
    let envelope = ArrayBuilder::new()
        .push(Vec::<u8>::new())
        .push(MapBuilder::new().build())
        .push(b"hello".as_slice())
        .push(vec![0u8; 64])
        .build();
    let envelope = to_canonical_vec(&envelope).unwrap();

    assert!(matches!(
        verify1(&envelope, b"", &leaf_public_key()),
        Err(CoseError::MalformedEnvelope(_))
    ));
}

#[test]
fn wrong_signature_length() {
    let envelope = ArrayBuilder::new()
        .push(vec![0xa1_u8, 0x01, 0x26])
        .push(MapBuilder::new().build())
        .push(b"hello".as_slice())
        .push(vec![1u8; 62])
        .build();
    let envelope = to_canonical_vec(&envelope).unwrap();

    assert!(matches!(
        verify1(&envelope, b"", &leaf_public_key()),
        Err(CoseError::MalformedEnvelope(_))
    ));
}

#[test]
fn random_key_signer() {
    let key = SigningKey::random(&mut OsRng);
    let spki = EcPublicKey::from_p256(&PublicKey::from(key.verifying_key()))
        .to_spki_der()
        .unwrap();
    let signer = EcdsaSigner::from_p256_key(key, Vec::new());

    for payload in [&b"a"[..], &[0u8; 1000][..], &b"hello"[..]] {
        let envelope = sign1(&signer, payload, b"", &[]).unwrap();
        assert_eq!(sign1_payload(&envelope).unwrap(), payload);
        assert!(parse_sign1(&envelope).unwrap().verify(b"", &spki).unwrap());
    }
}
