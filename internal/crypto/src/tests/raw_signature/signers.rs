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

use crate::{
    cose::certificate_public_key,
    raw_signature::{
        signer_from_cert_chain_and_private_key, validator_for_signing_alg, RawSignerError,
        SigningAlg,
    },
    tests::{full_chain, CHAIN_PEM, ES384_CERT_PEM, ES384_PRIVATE_KEY, LEAF_CERT, LEAF_PRIVATE_KEY},
};

#[test]
fn es256() {
    let signer =
        signer_from_cert_chain_and_private_key(CHAIN_PEM, LEAF_PRIVATE_KEY, SigningAlg::Es256)
            .unwrap();

    assert_eq!(signer.alg(), SigningAlg::Es256);
    assert_eq!(signer.cert_chain().unwrap(), full_chain());

    let data = b"some sample content to sign";
    let signature = signer.sign(data).unwrap();

    // DER SEQUENCE
    assert_eq!(signature[0], 0x30);

    let pub_key = certificate_public_key(LEAF_CERT).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();
    validator.validate(&signature, data, &pub_key).unwrap();
}

#[test]
fn es384() {
    let signer =
        signer_from_cert_chain_and_private_key(ES384_CERT_PEM, ES384_PRIVATE_KEY, SigningAlg::Es384)
            .unwrap();

    assert_eq!(signer.alg(), SigningAlg::Es384);
    let chain = signer.cert_chain().unwrap();
    assert_eq!(chain.len(), 1);

    let data = b"some sample content to sign";
    let signature = signer.sign(data).unwrap();

    let pub_key = certificate_public_key(&chain[0]).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es384).unwrap();
    validator.validate(&signature, data, &pub_key).unwrap();
}

#[test]
fn es512_not_supported() {
    let result =
        signer_from_cert_chain_and_private_key(CHAIN_PEM, LEAF_PRIVATE_KEY, SigningAlg::Es512);

    assert!(matches!(
        result,
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));
}

#[test]
fn key_for_wrong_curve() {
    let result =
        signer_from_cert_chain_and_private_key(CHAIN_PEM, LEAF_PRIVATE_KEY, SigningAlg::Es384);

    assert!(matches!(
        result,
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));
}

#[test]
fn private_key_not_pem() {
    let result = signer_from_cert_chain_and_private_key(CHAIN_PEM, b"\xff\xfe", SigningAlg::Es256);

    assert!(matches!(
        result,
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));
}

#[test]
fn key_only_pem_gives_empty_chain() {
    let signer =
        signer_from_cert_chain_and_private_key(LEAF_PRIVATE_KEY, LEAF_PRIVATE_KEY, SigningAlg::Es256)
            .unwrap();

    assert!(signer.cert_chain().unwrap().is_empty());
}
