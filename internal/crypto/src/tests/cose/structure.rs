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

use crate::cose::{build_to_be_maced, build_to_be_signed, labels::CoseAlgorithm, CoseError};

const PROTECTED_ES256: [u8; 3] = [0xa1, 0x01, 0x26];

#[test]
fn to_be_signed_bytes() {
    let tbs = build_to_be_signed(&PROTECTED_ES256, b"hello", b"").unwrap();
    assert_eq!(
        hex::encode(tbs),
        "846a5369676e61747572653143a10126404568656c6c6f"
    );
}

#[test]
fn detached_content_takes_the_payload_slot() {
    assert_eq!(
        build_to_be_signed(&PROTECTED_ES256, b"", b"hello").unwrap(),
        build_to_be_signed(&PROTECTED_ES256, b"hello", b"").unwrap()
    );
}

#[test]
fn empty_content() {
    let tbs = build_to_be_signed(&PROTECTED_ES256, b"", b"").unwrap();
    let expected = ArrayBuilder::new()
        .push("Signature1")
        .push(PROTECTED_ES256.as_slice())
        .push(Vec::<u8>::new())
        .push(Vec::<u8>::new())
        .build();
    assert_eq!(decode_one(&tbs).unwrap(), expected);
}

#[test]
fn to_be_maced_bytes() {
    let tbm = build_to_be_maced(&[0xa1, 0x01, 0x05], b"hello", b"").unwrap();
    assert_eq!(hex::encode(tbm), "84644d41433043a10105404568656c6c6f");
}

#[test]
fn payload_and_detached_content() {
    assert!(matches!(
        build_to_be_signed(&PROTECTED_ES256, b"hello", b"world"),
        Err(CoseError::PayloadAndDetachedContent)
    ));
    assert!(matches!(
        build_to_be_maced(&[], b"hello", b"world"),
        Err(CoseError::PayloadAndDetachedContent)
    ));
}

#[test]
fn algorithm_identifiers() {
    for alg in [
        CoseAlgorithm::Es256,
        CoseAlgorithm::Es384,
        CoseAlgorithm::Es512,
        CoseAlgorithm::HmacSha256,
    ] {
        assert_eq!(CoseAlgorithm::from_id(alg.id()), Some(alg));
    }
    assert_eq!(CoseAlgorithm::from_id(-8), None);
}

#[test]
fn protected_header_is_canonical_map() {
    let header = to_canonical_vec(&MapBuilder::new().put(1, Value::from(-7)).build()).unwrap();
    assert_eq!(header, PROTECTED_ES256);
}
