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

//! Session key agreement: ECDH over P-256 followed by HKDF, salted with the
//! hash of the session transcript.

use mdoc_cbor::{to_canonical_vec, Value};
use p256::{ecdh::diffie_hellman, PublicKey, SecretKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::hkdf::{hkdf, HkdfError, MacAlgorithm};

/// HKDF info string for the device MAC key.
pub const SESSION_MAC_KEY_INFO: &[u8; 7] = b"EMacKey";

/// Describes errors that can occur while deriving a session key.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionKeyError {
    /// The session transcript could not be wrapped for hashing.
    #[error(transparent)]
    CborError(#[from] mdoc_cbor::Error),

    /// Key derivation failed.
    #[error(transparent)]
    HkdfError(#[from] HkdfError),
}

/// Generate an ephemeral P-256 key pair from the operating system's random
/// number generator.
pub fn generate_p256_keypair() -> (SecretKey, PublicKey) {
    let secret = SecretKey::random(&mut OsRng);
    let public = secret.public_key();
    (secret, public)
}

/// Compute the ECDH shared secret (the x coordinate of the shared point).
pub fn ecdh(own_private: &SecretKey, peer_public: &PublicKey) -> Vec<u8> {
    diffie_hellman(own_private.to_nonzero_scalar(), peer_public.as_affine())
        .raw_secret_bytes()
        .to_vec()
}

/// Return the HKDF salt for a session: SHA-256 over `#6.24(bstr)` wrapping
/// the encoded session transcript.
pub fn session_transcript_salt(session_transcript: &[u8]) -> Result<Vec<u8>, SessionKeyError> {
    let wrapped = to_canonical_vec(&Value::encoded_cbor(session_transcript))?;
    Ok(Sha256::digest(&wrapped).to_vec())
}

/// Derive the 32-byte session MAC key shared with `peer_public`.
///
/// `session_transcript` must be the canonical encoding of the session
/// transcript. Both parties derive the same key from their own private key
/// and the other's public key.
pub fn derive_session_mac_key(
    peer_public: &PublicKey,
    own_private: &SecretKey,
    session_transcript: &[u8],
) -> Result<[u8; 32], SessionKeyError> {
    let shared_secret = ecdh(own_private, peer_public);
    let salt = session_transcript_salt(session_transcript)?;

    let okm = hkdf(
        MacAlgorithm::HmacSha256,
        &shared_secret,
        &salt,
        SESSION_MAC_KEY_INFO,
        32,
    )?;

    let mut key = [0u8; 32];
    key.copy_from_slice(&okm);
    Ok(key)
}
