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

use regex::Regex;

use super::helper_constants::{NOISE_PATTERN, NORMALIZED_PATTERN};

pub(super) struct ClassifierRegExps {
    /// Matches every character that must be dropped during normalization.
    pub noise_pattern: Regex,

    /// Matches a string that is already normalized: an optional leading plus
    /// sign followed by ASCII digits only.
    pub normalized_pattern: Regex,
}

impl ClassifierRegExps {
    pub fn new() -> Self {
        Self {
            // patterns are compiled-in constants
            noise_pattern: Regex::new(NOISE_PATTERN).unwrap(),
            normalized_pattern: Regex::new(NORMALIZED_PATTERN).unwrap(),
        }
    }
}
