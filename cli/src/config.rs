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

use std::{fs, io::Cursor, path::Path};

use anyhow::{Context, Result};
use mdoc_cbor::{Decoder, StreamExtractor, DEFAULT_MAX_ALLOCATION, DEFAULT_MAX_DEPTH};
use serde::Deserialize;

/// Settings read from the optional `--config` TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub decoder: DecoderSettings,
}

/// The `[decoder]` table.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderSettings {
    /// Deepest array/map/tag nesting accepted.
    pub max_depth: usize,

    /// Largest string length, in bytes, accepted.
    pub max_allocation: usize,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_allocation: DEFAULT_MAX_ALLOCATION,
        }
    }
}

impl Settings {
    pub fn from_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("reading settings")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;
        Self::from_toml(&toml)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl DecoderSettings {
    pub fn decoder<'a>(&self, bytes: &'a [u8]) -> Decoder<Cursor<&'a [u8]>> {
        Decoder::new(Cursor::new(bytes))
            .with_max_depth(self.max_depth)
            .with_max_allocation(self.max_allocation)
    }

    pub fn stream_extractor(&self) -> StreamExtractor {
        StreamExtractor::new()
            .with_max_depth(self.max_depth)
            .with_max_allocation(self.max_allocation)
    }
}
