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

use mdoc_cbor::{MapBuilder, Value};

use crate::{
    cose::{certificate_public_key, cose_key_decode, cose_key_encode, CoseError, EcPublicKey},
    session::generate_p256_keypair,
    tests::LEAF_CERT,
};

fn sample_key() -> EcPublicKey {
    let (_, public) = generate_p256_keypair();
    EcPublicKey::from_p256(&public)
}

fn raw_key(kty: i64, crv: i64, x: &[u8], y: &[u8]) -> Value {
    MapBuilder::new()
        .put(1, kty)
        .put(-1, crv)
        .put(-2, x)
        .put(-3, y)
        .build()
}

#[test]
fn encode_layout() {
    let key = sample_key();
    let encoded = cose_key_encode(&key);
    let map = encoded.as_map().unwrap();

    let labels: Vec<i64> = map.int_keys().unwrap();
    assert_eq!(labels, vec![1, -1, -2, -3]);
    assert_eq!(encoded.get_int::<i64>(1).unwrap(), 2);
    assert_eq!(encoded.get_int::<i64>(-1).unwrap(), 1);
    assert_eq!(encoded.get_bytes(-2).unwrap(), key.x);
    assert_eq!(encoded.get_bytes(-3).unwrap(), key.y);
}

#[test]
fn encode_then_decode() {
    let key = sample_key();
    assert_eq!(cose_key_decode(&cose_key_encode(&key)).unwrap(), key);
}

#[test]
fn wrong_key_type() {
    let key = sample_key();

    assert!(matches!(
        cose_key_decode(&raw_key(1, 1, &key.x, &key.y)),
        Err(CoseError::InvalidKey(_))
    ));
    assert!(matches!(
        cose_key_decode(&raw_key(2, 2, &key.x, &key.y)),
        Err(CoseError::InvalidKey(_))
    ));
}

#[test]
fn missing_coordinate() {
    let key = MapBuilder::new()
        .put(1, 2)
        .put(-1, 1)
        .put(-2, [7u8; 32].as_slice())
        .build();

    assert!(matches!(cose_key_decode(&key), Err(CoseError::CborError(_))));
    assert!(matches!(
        cose_key_decode(&Value::from("key")),
        Err(CoseError::CborError(_))
    ));
}

#[test]
fn short_coordinate_is_left_padded() {
    let x = [0x11u8; 31];
    let y = [0x22u8; 30];

    let key = cose_key_decode(&raw_key(2, 1, &x, &y)).unwrap();

    assert_eq!(key.x[0], 0);
    assert_eq!(&key.x[1..], &x);
    assert_eq!(&key.y[..2], &[0, 0]);
    assert_eq!(&key.y[2..], &y);
}

#[test]
fn long_coordinate_is_rejected() {
    let key = sample_key();

    let mut x = vec![0u8];
    x.extend_from_slice(&key.x);

    assert!(matches!(
        cose_key_decode(&raw_key(2, 1, &x, &key.y)),
        Err(CoseError::InvalidKey(_))
    ));
}

#[test]
fn sec1_conversions() {
    let key = sample_key();

    let sec1 = key.to_sec1_bytes();
    assert_eq!(sec1.len(), 65);
    assert_eq!(sec1[0], 0x04);
    assert_eq!(&sec1[1..33], &key.x);
    assert_eq!(&sec1[33..], &key.y);
    assert_eq!(EcPublicKey::from_sec1_bytes(&sec1).unwrap(), key);

    assert!(matches!(
        EcPublicKey::from_sec1_bytes(&sec1[..64]),
        Err(CoseError::InvalidKey(_))
    ));
}

#[test]
fn point_off_the_curve() {
    let key = EcPublicKey {
        x: [1; 32],
        y: [1; 32],
    };

    assert!(matches!(key.to_p256(), Err(CoseError::InvalidKey(_))));
    assert!(matches!(key.to_spki_der(), Err(CoseError::InvalidKey(_))));
}

#[test]
fn spki_conversions() {
    let spki = certificate_public_key(LEAF_CERT).unwrap();
    let key = EcPublicKey::from_spki_der(&spki).unwrap();

    assert_eq!(key.to_spki_der().unwrap(), spki);
    assert_eq!(cose_key_decode(&cose_key_encode(&key)).unwrap(), key);

    assert!(matches!(
        EcPublicKey::from_spki_der(b"not a key"),
        Err(CoseError::InvalidKey(_))
    ));
}
