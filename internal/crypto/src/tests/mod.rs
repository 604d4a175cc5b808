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

#![allow(clippy::unwrap_used)]

mod cose;
mod raw_signature;

pub(crate) const LEAF_CERT: &[u8] = include_bytes!("fixtures/certs/leaf.der");
pub(crate) const INTERMEDIATE_CERT: &[u8] = include_bytes!("fixtures/certs/intermediate.der");
pub(crate) const ROOT_CERT: &[u8] = include_bytes!("fixtures/certs/root.der");
pub(crate) const CHAIN_PEM: &[u8] = include_bytes!("fixtures/certs/chain.pem");
pub(crate) const LEAF_PRIVATE_KEY: &[u8] = include_bytes!("fixtures/certs/leaf.priv");
pub(crate) const ES384_CERT_PEM: &[u8] = include_bytes!("fixtures/certs/es384.pem");
pub(crate) const ES384_PRIVATE_KEY: &[u8] = include_bytes!("fixtures/certs/es384.priv");

pub(crate) fn full_chain() -> Vec<Vec<u8>> {
    vec![
        LEAF_CERT.to_vec(),
        INTERMEDIATE_CERT.to_vec(),
        ROOT_CERT.to_vec(),
    ]
}
