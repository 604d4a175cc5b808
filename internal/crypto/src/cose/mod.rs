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

//! `COSE_Sign1` and `COSE_Mac0` envelopes ([RFC 8152]) and EC2 `COSE_Key`
//! encoding, as used for issuer and device authentication of mobile
//! documents.
//!
//! [RFC 8152]: https://datatracker.ietf.org/doc/html/rfc8152

mod error;
pub use error::CoseError;

mod key;
pub use key::{cose_key_decode, cose_key_encode, EcPublicKey};

pub mod labels;

mod mac0;
pub use mac0::{mac0, mac0_tag, mac0_verify, parse_mac0, CoseMac0};

mod sign1;
pub use sign1::{parse_sign1, sign1, sign1_payload, CoseSign1};

mod structure;
pub use structure::{build_to_be_maced, build_to_be_signed};

mod verify;
pub use verify::{verify1, verify1_with};

mod x5chain;
pub use x5chain::{certificate_public_key, x5chain_extract};
