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

//! Builders that assemble arrays and maps and hand back a finished
//! [`Value`].

use crate::{Map, Value};

/// Builds a CBOR array.
///
/// ```
/// use mdoc_cbor::{ArrayBuilder, Value};
///
/// let array = ArrayBuilder::new().push("Signature1").push(vec![0xa0_u8]).build();
/// assert!(matches!(array, Value::Array(ref items) if items.len() == 2));
/// ```
#[derive(Debug, Default)]
pub struct ArrayBuilder {
    items: Vec<Value>,
}

impl ArrayBuilder {
    /// Starts an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn push(mut self, item: impl Into<Value>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends `item` wrapped in the semantic tag `tag`.
    pub fn push_tagged(self, tag: u64, item: impl Into<Value>) -> Self {
        self.push(Value::tagged(tag, item))
    }

    /// Appends every item of `items`.
    pub fn extend<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Finishes the array.
    pub fn build(self) -> Value {
        Value::Array(self.items)
    }
}

/// Builds a CBOR map.
///
/// Putting a key that is already present replaces its value and keeps the
/// position of the first insertion.
#[derive(Debug, Default)]
pub struct MapBuilder {
    map: Map,
}

impl MapBuilder {
    /// Starts an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    pub fn put(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.map.insert(key, value);
        self
    }

    /// Adds or replaces an entry whose value is wrapped in the semantic tag
    /// `tag`.
    pub fn put_tagged(self, key: impl Into<Value>, tag: u64, value: impl Into<Value>) -> Self {
        self.put(key, Value::tagged(tag, value))
    }

    /// Finishes the map.
    pub fn build(self) -> Value {
        Value::Map(self.map)
    }
}
