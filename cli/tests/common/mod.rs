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

#![allow(dead_code)]

use std::{path::PathBuf, process::Command};

use assert_cmd::prelude::*;

pub const SIGNED_ENVELOPE: &str = "signed.cose";
pub const DETACHED_ENVELOPE: &str = "detached.cose";
pub const DETACHED_CONTENT: &str = "detached.bin";
pub const CAPTURE: &str = "capture.bin";
pub const CHAIN_PEM: &str = "chain.pem";

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdoctool").unwrap();
    cmd.env_remove("MDOCTOOL_CONFIG").env_remove("RUST_LOG");
    cmd
}
