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

//! Error type shared by the encoder, decoder and typed accessors.

use std::io;

use thiserror::Error;

/// Describes errors that can occur while decoding CBOR or extracting typed
/// values from a decoded [`Value`].
///
/// Decoding problems, type mismatches, numeric range problems and missing
/// keys are reported through distinct variants so callers can tell them
/// apart.
///
/// [`Value`]: crate::Value
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading or writing.
    #[error("I/O error ({0})")]
    Io(io::Error),

    /// The input ended before a complete data item was read.
    #[error("unexpected end of input")]
    Eof,

    /// A text string contained invalid UTF-8.
    #[error("invalid UTF-8 in text string")]
    InvalidUtf8,

    /// The input is not well-formed CBOR.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Bytes remained after the single data item that was expected.
    #[error("unexpected trailing data: {0} bytes remaining")]
    TrailingData(usize),

    /// A map contained the same key more than once.
    #[error("duplicate map key {0}")]
    DuplicateKey(String),

    /// The requested key is not present in the map.
    #[error("missing map key {0}")]
    MissingKey(String),

    /// The data item does not have the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type that was requested.
        expected: &'static str,

        /// Type that was present.
        found: &'static str,
    },

    /// The data item does not carry the required semantic tag.
    #[error("tag mismatch: expected tag {expected}, found {}", describe_tag(.found))]
    TagMismatch {
        /// Tag that was required.
        expected: u64,

        /// Tag that was present, if any.
        found: Option<u64>,
    },

    /// An integer does not fit in the requested integer type.
    #[error("integer {value} is out of range for {target}")]
    OutOfRange {
        /// The decoded integer value.
        value: i128,

        /// Name of the requested integer type.
        target: &'static str,
    },

    /// A tagged date/time string could not be parsed.
    #[error("invalid date/time string {0:?}")]
    InvalidDateTime(String),
}

impl Error {
    /// Returns `true` if this error only means the input was truncated, so
    /// that more bytes could still produce a complete data item.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Eof)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Eof
        } else {
            Error::Io(err)
        }
    }
}

fn describe_tag(tag: &Option<u64>) -> String {
    match tag {
        Some(tag) => format!("tag {tag}"),
        None => "no tag".to_string(),
    }
}

/// A specialized `Result` type for CBOR operations.
pub type Result<T> = std::result::Result<T, Error>;
