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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod constants;
pub use constants::{
    DEFAULT_MAX_ALLOCATION, DEFAULT_MAX_DEPTH, TAG_DATETIME_STRING, TAG_ENCODED_CBOR,
};

pub mod error;
pub use error::{Error, Result};

mod value;
pub use value::{Map, Value};

pub mod encoder;
pub use encoder::{encode, to_canonical_vec, to_vec, to_writer, Encoder};

pub mod decoder;
pub use decoder::{decode_next, decode_one, decode_sequence, probe_length, Decoder};

mod accessors;
pub use accessors::extract_tagged_cbor;

mod builder;
pub use builder::{ArrayBuilder, MapBuilder};

mod pretty;
pub use pretty::{pretty_print, pretty_print_encoded};

mod stream;
pub use stream::StreamExtractor;

pub mod edit;
pub use edit::{canonicalize, clear_map_value, set_map_value};
