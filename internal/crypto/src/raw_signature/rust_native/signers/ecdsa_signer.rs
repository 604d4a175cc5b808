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

use ecdsa::signature::Signer;
use p256::{
    ecdsa::{Signature as P256Signature, SigningKey as P256SigningKey},
    pkcs8::DecodePrivateKey,
};
use p384::ecdsa::{Signature as P384Signature, SigningKey as P384SigningKey};
use x509_parser::{error::PEMError, pem::Pem};

use crate::raw_signature::{RawSigner, RawSignerError, SigningAlg};

// Signing keys for ES256 and ES384 are different types. There is no built-in
// ES512 key.
enum EcdsaSigningKey {
    Es256(P256SigningKey),
    Es384(P384SigningKey),
}

/// Generates DER encoded ECDSA signatures with a P-256 or P-384 private key.
pub struct EcdsaSigner {
    cert_chain: Vec<Vec<u8>>,
    signing_key: EcdsaSigningKey,
}

impl EcdsaSigner {
    /// Create a signer from a PEM certificate chain (end-entity first) and a
    /// PEM PKCS#8 private key.
    ///
    /// Blocks other than `CERTIFICATE` in `cert_chain` are skipped.
    pub fn from_cert_chain_and_private_key(
        cert_chain: &[u8],
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, RawSignerError> {
        let cert_chain = Pem::iter_from_buffer(cert_chain)
            .filter(|r| r.as_ref().map_or(true, |pem| pem.label == "CERTIFICATE"))
            .map(|r| r.map(|pem| pem.contents))
            .collect::<Result<Vec<Vec<u8>>, PEMError>>()
            .map_err(|e| RawSignerError::InvalidSigningCredentials(e.to_string()))?;

        let private_key_pem = std::str::from_utf8(private_key).map_err(|e| {
            RawSignerError::InvalidSigningCredentials(format!("invalid private key: {e}"))
        })?;

        let signing_key = match alg {
            SigningAlg::Es256 => {
                let key = P256SigningKey::from_pkcs8_pem(private_key_pem).map_err(|e| {
                    RawSignerError::InvalidSigningCredentials(format!(
                        "invalid ES256 private key: {e}"
                    ))
                })?;
                EcdsaSigningKey::Es256(key)
            }
            SigningAlg::Es384 => {
                let key = P384SigningKey::from_pkcs8_pem(private_key_pem).map_err(|e| {
                    RawSignerError::InvalidSigningCredentials(format!(
                        "invalid ES384 private key: {e}"
                    ))
                })?;
                EcdsaSigningKey::Es384(key)
            }
            SigningAlg::Es512 => {
                return Err(RawSignerError::InvalidSigningCredentials(
                    "unsupported algorithm es512".to_string(),
                ))
            }
        };

        Ok(EcdsaSigner {
            cert_chain,
            signing_key,
        })
    }

    /// Create an ES256 signer from a P-256 signing key and an already decoded
    /// DER certificate chain, which may be empty.
    pub fn from_p256_key(key: P256SigningKey, cert_chain: Vec<Vec<u8>>) -> Self {
        EcdsaSigner {
            cert_chain,
            signing_key: EcdsaSigningKey::Es256(key),
        }
    }

    /// Create an ES384 signer from a P-384 signing key and an already decoded
    /// DER certificate chain, which may be empty.
    pub fn from_p384_key(key: P384SigningKey, cert_chain: Vec<Vec<u8>>) -> Self {
        EcdsaSigner {
            cert_chain,
            signing_key: EcdsaSigningKey::Es384(key),
        }
    }
}

impl RawSigner for EcdsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError> {
        match self.signing_key {
            EcdsaSigningKey::Es256(ref key) => {
                let signature: P256Signature = key
                    .try_sign(data)
                    .map_err(|e| RawSignerError::InternalError(e.to_string()))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
            EcdsaSigningKey::Es384(ref key) => {
                let signature: P384Signature = key
                    .try_sign(data)
                    .map_err(|e| RawSignerError::InternalError(e.to_string()))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }

    fn alg(&self) -> SigningAlg {
        match self.signing_key {
            EcdsaSigningKey::Es256(_) => SigningAlg::Es256,
            EcdsaSigningKey::Es384(_) => SigningAlg::Es384,
        }
    }

    fn cert_chain(&self) -> Result<Vec<Vec<u8>>, RawSignerError> {
        Ok(self.cert_chain.clone())
    }
}
