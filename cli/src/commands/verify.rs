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

use anyhow::{bail, Context, Result};
use clap::Parser;
use mdoc_crypto::{
    chain::validate_chain,
    cose::{certificate_public_key, parse_sign1},
};

use super::{read_certificates, read_file};

#[derive(Debug, Parser)]
pub struct Verify {
    /// Input path to an encoded COSE_Sign1.
    pub path: PathBuf,

    /// Path to the detached content the envelope was signed over.
    #[clap(short, long)]
    pub detached: Option<PathBuf>,

    /// Certificate (PEM or DER) holding the signer's key. Defaults to the
    /// first certificate in the envelope's x5chain header.
    #[clap(long)]
    pub cert: Option<PathBuf>,

    /// Also check the signatures along the x5chain header.
    #[clap(long)]
    pub chain: bool,
}

impl Verify {
    pub fn execute(&self) -> Result<()> {
        let envelope = read_file(&self.path)?;
        let sign1 = parse_sign1(&envelope).context("Input is not a COSE_Sign1")?;
        let x5chain = sign1.x5chain()?;

        let cert = match &self.cert {
            Some(path) => read_certificates(path)?.into_iter().next(),
            None => x5chain.first().cloned(),
        };
        let Some(cert) = cert else {
            bail!("No certificate to verify with, pass --cert or include an x5chain header");
        };
        let public_key = certificate_public_key(&cert)?;

        let detached = match &self.detached {
            Some(path) => read_file(path)?,
            None => Vec::new(),
        };

        println!("Algorithm: {}", sign1.signing_alg()?);

        if !sign1.verify(&detached, &public_key)? {
            bail!("Signature does not match");
        }
        println!("Signature valid");

        if self.chain {
            if !validate_chain(&x5chain) {
                bail!("Certificate chain invalid");
            }
            println!("Certificate chain valid ({} certificates)", x5chain.len());
        }

        Ok(())
    }
}
