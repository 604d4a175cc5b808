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

//! This module binds Rust native logic for validating raw signatures to this
//! crate's [`RawSignatureValidator`] trait.

use x509_parser::oid_registry::Oid;

use crate::raw_signature::{oids::*, RawSignatureValidator, SigningAlg};

mod ecdsa_validator;
pub use ecdsa_validator::EcdsaValidator;

/// Return a validator for the given signing algorithm.
pub(crate) fn validator_for_signing_alg(alg: SigningAlg) -> Option<Box<dyn RawSignatureValidator>> {
    match alg {
        SigningAlg::Es256 => Some(Box::new(EcdsaValidator::Es256)),
        SigningAlg::Es384 => Some(Box::new(EcdsaValidator::Es384)),
        SigningAlg::Es512 => None,
    }
}

/// Return the signing algorithm named by an X.509 signature algorithm OID.
pub(crate) fn signing_alg_for_sig_oid(sig_alg: &Oid) -> Option<SigningAlg> {
    if *sig_alg == ECDSA_WITH_SHA256_OID {
        Some(SigningAlg::Es256)
    } else if *sig_alg == ECDSA_WITH_SHA384_OID {
        Some(SigningAlg::Es384)
    } else if *sig_alg == ECDSA_WITH_SHA512_OID {
        Some(SigningAlg::Es512)
    } else {
        None
    }
}
