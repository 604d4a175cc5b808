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

// Wire-level constants shared by the encoder and decoder.

// Major types
pub(crate) const MAJOR_UNSIGNED: u8 = 0;
pub(crate) const MAJOR_NEGATIVE: u8 = 1;
pub(crate) const MAJOR_BYTES: u8 = 2;
pub(crate) const MAJOR_TEXT: u8 = 3;
pub(crate) const MAJOR_ARRAY: u8 = 4;
pub(crate) const MAJOR_MAP: u8 = 5;
pub(crate) const MAJOR_TAG: u8 = 6;
pub(crate) const MAJOR_SIMPLE: u8 = 7;

// Additional info values for major type 7
pub(crate) const FALSE: u8 = 20;
pub(crate) const TRUE: u8 = 21;
pub(crate) const NULL: u8 = 22;
pub(crate) const UNDEFINED: u8 = 23;
pub(crate) const FLOAT16: u8 = 25;
pub(crate) const FLOAT32: u8 = 26;
pub(crate) const FLOAT64: u8 = 27;
pub(crate) const INDEFINITE: u8 = 31;
pub(crate) const BREAK: u8 = 0xff;

/// Tag for an RFC 3339 date/time text string.
pub const TAG_DATETIME_STRING: u64 = 0;

/// Tag for a byte string holding an embedded, already encoded CBOR data item
/// (`#6.24(bstr)`).
pub const TAG_ENCODED_CBOR: u64 = 24;

/// Default maximum allocation size (100MB) for a single string or
/// collection length read by the decoder.
pub const DEFAULT_MAX_ALLOCATION: usize = 100 * 1024 * 1024;

/// Default maximum nesting depth accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 128;
