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

use std::cmp::Ordering;

/// Compare two mdoc version strings.
///
/// ISO/IEC 18013-5 does not define an ordering for version strings, so this
/// is plain lexicographic comparison. It is right for "1.0" against "1.1"
/// but not a semantic version comparator: "1.10" sorts before "1.9".
pub fn mdoc_version_cmp(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

