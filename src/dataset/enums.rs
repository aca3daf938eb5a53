// Copyright (C) 2025 The dz_phonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Categorizes Algerian phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCategory {
    /// **Mobile numbers.**
    /// Nine significant digits starting with `5`, `6` or `7`; the leading
    /// digit identifies the carrier.
    Mobile,
    /// **Fixed-line numbers.**
    /// Eight significant digits starting with `2`, `3` or `4`; the first two
    /// digits are the area code of the serving region.
    Landline,
    /// **Voice over IP numbers.**
    /// Eight significant digits starting with `98`.
    #[serde(rename = "voip")]
    VoIP,
    /// **VSAT numbers.**
    /// Eight significant digits starting with `96`, used by satellite
    /// terminals.
    Vsat,
    /// **Emergency short codes.**
    /// Two to four digits that exactly match a known emergency service.
    Emergency,
    /// **Invalid number.**
    /// The input did not match any known numbering plan entry.
    Invalid,
}

impl NumberCategory {
    /// Upper-case label used in human readable output, e.g. `VOIP`.
    pub fn label(&self) -> &'static str {
        match self {
            NumberCategory::Mobile => "MOBILE",
            NumberCategory::Landline => "LANDLINE",
            NumberCategory::VoIP => "VOIP",
            NumberCategory::Vsat => "VSAT",
            NumberCategory::Emergency => "EMERGENCY",
            NumberCategory::Invalid => "INVALID",
        }
    }
}

/// Digit count a national significant number of a category must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedLength {
    /// The category has a single fixed length.
    Exact(usize),
    /// Any of the listed lengths is acceptable (emergency short codes).
    AnyOf(&'static [usize]),
}

impl ExpectedLength {
    pub fn matches(&self, len: usize) -> bool {
        match self {
            ExpectedLength::Exact(expected) => *expected == len,
            ExpectedLength::AnyOf(expected) => expected.contains(&len),
        }
    }
}
