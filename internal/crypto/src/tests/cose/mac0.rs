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

use crate::cose::{labels::CoseAlgorithm, mac0, mac0_tag, mac0_verify, parse_mac0, CoseError};

const KEY: [u8; 32] = [0x4b; 32];

const HELLO_TAG: &str = "0a632521fc1afbd482b4e2e11ff380d7313dfc9ddf9aa532e440c4e9bcd49d5e";

#[test]
fn known_answer() {
    let envelope = mac0(&KEY, b"hello", b"").unwrap();

    assert_eq!(
        hex::encode(&envelope),
        format!("8443a10105a04568656c6c6f5820{HELLO_TAG}")
    );
    assert_eq!(hex::encode(mac0_tag(&envelope).unwrap()), HELLO_TAG);

    let parsed = parse_mac0(&envelope).unwrap();
    assert_eq!(parsed.algorithm().unwrap(), CoseAlgorithm::HmacSha256);
    assert!(parsed.unprotected.is_empty());
}

#[test]
fn verify() {
    let envelope = mac0(&KEY, b"hello", b"").unwrap();

    assert!(mac0_verify(&envelope, &KEY, b"").unwrap());
    assert!(!mac0_verify(&envelope, &[0x4c; 32], b"").unwrap());
}

#[test]
fn tampered_tag() {
    let mut parsed = parse_mac0(&mac0(&KEY, b"hello", b"").unwrap()).unwrap();
    parsed.tag[0] ^= 1;

    assert!(!mac0_verify(&parsed.to_vec().unwrap(), &KEY, b"").unwrap());

    parsed.tag.truncate(16);
    assert!(!mac0_verify(&parsed.to_vec().unwrap(), &KEY, b"").unwrap());
}

#[test]
fn detached_content() {
    let envelope = mac0(&KEY, b"", b"hello").unwrap();

    let value = decode_one(&envelope).unwrap();
    assert!(value.as_array().unwrap()[2].is_null());

    // Same MAC structure as an attached "hello".
    assert_eq!(hex::encode(mac0_tag(&envelope).unwrap()), HELLO_TAG);

    assert!(mac0_verify(&envelope, &KEY, b"hello").unwrap());
    assert!(!mac0_verify(&envelope, &KEY, b"jello").unwrap());
}

#[test]
fn payload_and_detached_content() {
    assert!(matches!(
        mac0(&KEY, b"hello", b"hello"),
        Err(CoseError::PayloadAndDetachedContent)
    ));

    let envelope = mac0(&KEY, b"hello", b"").unwrap();
    assert!(matches!(
        mac0_verify(&envelope, &KEY, b"hello"),
        Err(CoseError::PayloadAndDetachedContent)
    ));
}

#[test]
fn signature_algorithm_rejected() {
    let envelope = ArrayBuilder::new()
        .push(vec![0xa1_u8, 0x01, 0x26])
        .push(MapBuilder::new().build())
        .push(b"hello".as_slice())
        .push(vec![0u8; 32])
        .build();
    let envelope = to_canonical_vec(&envelope).unwrap();

    assert!(matches!(
        mac0_verify(&envelope, &KEY, b""),
        Err(CoseError::UnsupportedAlgorithm(-7))
    ));
}

#[test]
fn tagged_envelope() {
    let envelope = mac0(&KEY, b"hello", b"").unwrap();
    let tagged = to_canonical_vec(&Value::tagged(17, decode_one(&envelope).unwrap())).unwrap();

    assert!(mac0_verify(&tagged, &KEY, b"").unwrap());

    let wrong_tag = to_canonical_vec(&Value::tagged(18, decode_one(&envelope).unwrap())).unwrap();
    assert!(matches!(
        parse_mac0(&wrong_tag),
        Err(CoseError::MalformedEnvelope(_))
    ));
}

#[test]
fn malformed() {
    assert!(matches!(
        mac0_tag(&[0x83, 0x40, 0xa0, 0xf6]),
        Err(CoseError::MalformedEnvelope(_))
    ));
    assert!(matches!(mac0_tag(&[0x84]), Err(CoseError::CborError(_))));
}
