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

//! Recovering message boundaries from an unframed byte stream.

use std::io::Cursor;

use log::debug;

use crate::{constants::*, Decoder, Error, Result};

/// Accumulates bytes from a transport that does not frame messages and hands
/// back one complete CBOR data item at a time.
///
/// An extractor belongs to a single stream; it is not meant to be shared
/// between connections.
///
/// ```
/// use mdoc_cbor::StreamExtractor;
///
/// let mut stream = StreamExtractor::new();
/// stream.push(&[0x82, 0x01]);
/// assert_eq!(stream.extract().unwrap(), None);
///
/// stream.push(&[0x02, 0x61]);
/// assert_eq!(stream.extract().unwrap(), Some(vec![0x82, 0x01, 0x02]));
/// assert_eq!(stream.pending(), [0x61]);
/// ```
#[derive(Debug)]
pub struct StreamExtractor {
    buffer: Vec<u8>,
    max_allocation: usize,
    max_depth: usize,
}

impl Default for StreamExtractor {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            max_allocation: DEFAULT_MAX_ALLOCATION,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl StreamExtractor {
    /// Creates an extractor with an empty buffer and default decoder limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest string length accepted inside a message (builder
    /// pattern).
    pub fn with_max_allocation(mut self, max_bytes: usize) -> Self {
        self.max_allocation = max_bytes;
        self
    }

    /// Sets the maximum nesting depth accepted inside a message (builder
    /// pattern).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Appends bytes received from the transport.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Bytes received but not yet returned by [`extract`](Self::extract).
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Removes and returns the first complete data item.
    ///
    /// Returns `Ok(None)` while the buffer holds only part of an item; the
    /// caller should push more bytes and try again. Malformed data that no
    /// amount of further input could complete is an error.
    pub fn extract(&mut self) -> Result<Option<Vec<u8>>> {
        match self.available_length() {
            Ok(len) => {
                let rest = self.buffer.split_off(len);
                let item = std::mem::replace(&mut self.buffer, rest);
                debug!(
                    "extracted {} byte data item, {} bytes pending",
                    item.len(),
                    self.buffer.len()
                );
                Ok(Some(item))
            }
            Err(Error::Eof) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn available_length(&self) -> Result<usize> {
        let mut decoder = Decoder::new(Cursor::new(&self.buffer))
            .with_max_allocation(self.max_allocation)
            .with_max_depth(self.max_depth);
        decoder.decode_value()?;
        usize::try_from(decoder.position())
            .map_err(|_| Error::Syntax("data item length overflows usize".to_string()))
    }
}
