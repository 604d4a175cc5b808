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

//! Pairwise validation of an ordered X.509 certificate chain.
//!
//! IMPORTANT: Only signatures are checked. Basic constraints, key usage,
//! validity periods and revocation are not, so a `true` result does not mean
//! the chain is trusted.

use x509_parser::{certificate::X509Certificate, prelude::FromDer};

use crate::raw_signature::rust_native::validators::{
    signing_alg_for_sig_oid, validator_for_signing_alg,
};

/// Return `true` if every certificate in `certs` (DER, end-entity first) is
/// signed by the public key of the certificate that follows it.
///
/// Chains of zero or one certificate are trivially valid. Any parse failure,
/// unsupported algorithm or signature mismatch makes the chain invalid.
pub fn validate_chain(certs: &[Vec<u8>]) -> bool {
    certs
        .windows(2)
        .enumerate()
        .all(|(index, pair)| verify_link(index, &pair[0], &pair[1]))
}

fn verify_link(index: usize, cert_der: &[u8], issuer_der: &[u8]) -> bool {
    let Ok((_, cert)) = X509Certificate::from_der(cert_der) else {
        log::debug!("chain certificate {index} can not be parsed");
        return false;
    };

    let Ok((_, issuer)) = X509Certificate::from_der(issuer_der) else {
        log::debug!("chain certificate {} can not be parsed", index + 1);
        return false;
    };

    let Some(alg) = signing_alg_for_sig_oid(&cert.signature_algorithm.algorithm) else {
        log::debug!(
            "chain certificate {index} uses unsupported signature algorithm {}",
            cert.signature_algorithm.algorithm
        );
        return false;
    };

    let Some(validator) = validator_for_signing_alg(alg) else {
        log::debug!("no validator for {alg} in chain certificate {index}");
        return false;
    };

    let data = cert.tbs_certificate.as_ref();
    let sig = cert.signature_value.as_ref();

    match validator.validate(sig, data, issuer.public_key().raw) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("chain certificate {index} not signed by its successor: {err}");
            false
        }
    }
}
