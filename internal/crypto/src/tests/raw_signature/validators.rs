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

use p256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::{
    cose::{certificate_public_key, EcPublicKey},
    ec_utils::der_to_cose,
    raw_signature::{
        validator_for_signing_alg, EcdsaSigner, RawSignatureValidationError, RawSigner, SigningAlg,
    },
    tests::{CHAIN_PEM, LEAF_CERT, LEAF_PRIVATE_KEY},
};

const SAMPLE_DATA: &[u8] = b"some sample content to sign";

fn leaf_signature() -> Vec<u8> {
    signer().sign(SAMPLE_DATA).unwrap()
}

fn signer() -> EcdsaSigner {
    EcdsaSigner::from_cert_chain_and_private_key(CHAIN_PEM, LEAF_PRIVATE_KEY, SigningAlg::Es256)
        .unwrap()
}

#[test]
fn es256() {
    let pub_key = certificate_public_key(LEAF_CERT).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();

    validator
        .validate(&leaf_signature(), SAMPLE_DATA, &pub_key)
        .unwrap();
}

#[test]
fn es256_fixed_width_signature() {
    let pub_key = certificate_public_key(LEAF_CERT).unwrap();
    let raw = der_to_cose(&leaf_signature(), 32).unwrap();

    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();
    validator.validate(&raw, SAMPLE_DATA, &pub_key).unwrap();
}

#[test]
fn es256_bad_signature() {
    let mut signature = der_to_cose(&leaf_signature(), 32).unwrap();
    signature[10] ^= 0x10;

    let pub_key = certificate_public_key(LEAF_CERT).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();

    assert_eq!(
        validator
            .validate(&signature, SAMPLE_DATA, &pub_key)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn es256_bad_data() {
    let signature = leaf_signature();
    let pub_key = certificate_public_key(LEAF_CERT).unwrap();

    let mut data = SAMPLE_DATA.to_vec();
    data[10] = 0;

    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();

    assert_eq!(
        validator.validate(&signature, &data, &pub_key).unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn es256_wrong_key() {
    let other = SigningKey::random(&mut OsRng);
    let other_signer = EcdsaSigner::from_p256_key(other, Vec::new());
    let signature = other_signer.sign(SAMPLE_DATA).unwrap();

    let pub_key = certificate_public_key(LEAF_CERT).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();

    assert_eq!(
        validator
            .validate(&signature, SAMPLE_DATA, &pub_key)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn bare_key_signer() {
    let key = SigningKey::random(&mut OsRng);
    let pub_key = EcPublicKey::from_p256(&key.verifying_key().into())
        .to_spki_der()
        .unwrap();

    let signer = EcdsaSigner::from_p256_key(key, Vec::new());
    assert_eq!(signer.alg(), SigningAlg::Es256);
    assert!(signer.cert_chain().unwrap().is_empty());

    let signature = signer.sign(SAMPLE_DATA).unwrap();
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();
    validator.validate(&signature, SAMPLE_DATA, &pub_key).unwrap();
}

#[test]
fn invalid_public_key() {
    let validator = validator_for_signing_alg(SigningAlg::Es256).unwrap();

    assert_eq!(
        validator
            .validate(&leaf_signature(), SAMPLE_DATA, &[0x30, 0x00])
            .unwrap_err(),
        RawSignatureValidationError::InvalidPublicKey
    );
}

#[test]
fn es512_has_no_builtin_validator() {
    assert!(validator_for_signing_alg(SigningAlg::Es512).is_none());
}
