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

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use mdoc_crypto::chain::validate_chain;

use super::read_certificates;

#[derive(Debug, Parser)]
pub struct Chain {
    /// Certificate files (PEM or DER), leaf first. A PEM file may hold
    /// several certificates.
    #[clap(required = true)]
    pub paths: Vec<PathBuf>,
}

impl Chain {
    pub fn execute(&self) -> Result<()> {
        let mut certs = Vec::new();
        for path in &self.paths {
            certs.extend(read_certificates(path)?);
        }

        if !validate_chain(&certs) {
            bail!("Chain invalid");
        }
        println!("Chain valid ({} certificates)", certs.len());

        Ok(())
    }
}
