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

use std::collections::HashMap;

use log::debug;

use super::{
    ExpectedLength, NumberCategory, Region,
    tables::{
        EMERGENCY_LENGTHS, EMERGENCY_NUMBERS, LANDLINE_LENGTH, LANDLINE_REGIONS, MOBILE_CARRIERS,
        MOBILE_LENGTH, SPECIAL_NUMBERS, VOIP_LENGTH, VSAT_LENGTH,
    },
};

/// Read-only lookup tables for the Algerian numbering plan.
///
/// Built once from the compiled-in tables and never mutated afterwards, so a
/// shared reference can be used from any number of threads.
pub struct ReferenceDataset {
    /// A mapping from a leading mobile digit to the carrier name.
    mobile_carriers: HashMap<char, &'static str>,

    /// A mapping from a two digit area code to its region. When the source
    /// table lists an area code more than once, the last listed region wins.
    landline_regions: HashMap<&'static str, &'static Region>,

    /// A mapping from an emergency short code to the service it reaches.
    emergency_numbers: HashMap<&'static str, &'static str>,

    /// A mapping from a special-service prefix to the service name.
    special_numbers: HashMap<&'static str, &'static str>,
}

impl ReferenceDataset {
    pub(super) fn new() -> Self {
        let mut landline_regions = HashMap::with_capacity(LANDLINE_REGIONS.len());
        for (area_code, region) in LANDLINE_REGIONS {
            if let Some(previous) = landline_regions.insert(*area_code, region) {
                debug!(
                    "Area code {} listed for {} and {}, keeping {}",
                    area_code, previous.name, region.name, region.name
                );
            }
        }
        debug!(
            "Loaded {} landline area codes from {} region entries",
            landline_regions.len(),
            LANDLINE_REGIONS.len()
        );

        Self {
            mobile_carriers: MOBILE_CARRIERS.iter().copied().collect(),
            landline_regions,
            emergency_numbers: EMERGENCY_NUMBERS.iter().copied().collect(),
            special_numbers: SPECIAL_NUMBERS.iter().copied().collect(),
        }
    }

    pub fn mobile_carrier(&self, first_digit: char) -> Option<&'static str> {
        self.mobile_carriers.get(&first_digit).copied()
    }

    pub fn landline_region(&self, area_code: &str) -> Option<&'static Region> {
        self.landline_regions.get(area_code).copied()
    }

    /// Returns every region the source table lists under `area_code`, in
    /// table order. Only the last one is reachable through
    /// [`ReferenceDataset::landline_region`].
    pub fn landline_region_candidates<'a>(
        &self,
        area_code: &'a str,
    ) -> impl Iterator<Item = &'static Region> + 'a {
        LANDLINE_REGIONS
            .iter()
            .filter(move |(code, _)| *code == area_code)
            .map(|(_, region)| region)
    }

    /// Sorted list of area codes that resolve to a region.
    pub fn area_codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.landline_regions.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn is_emergency_number(&self, digits: &str) -> bool {
        self.emergency_numbers.contains_key(digits)
    }

    pub fn emergency_service(&self, digits: &str) -> Option<&'static str> {
        self.emergency_numbers.get(digits).copied()
    }

    pub fn special_service(&self, prefix: &str) -> Option<&'static str> {
        self.special_numbers.get(prefix).copied()
    }

    /// Number of significant digits a number of `category` must have.
    /// `Invalid` has no expected length.
    pub fn expected_length(&self, category: NumberCategory) -> Option<ExpectedLength> {
        match category {
            NumberCategory::Mobile => Some(ExpectedLength::Exact(MOBILE_LENGTH)),
            NumberCategory::Landline => Some(ExpectedLength::Exact(LANDLINE_LENGTH)),
            NumberCategory::VoIP => Some(ExpectedLength::Exact(VOIP_LENGTH)),
            NumberCategory::Vsat => Some(ExpectedLength::Exact(VSAT_LENGTH)),
            NumberCategory::Emergency => Some(ExpectedLength::AnyOf(EMERGENCY_LENGTHS)),
            NumberCategory::Invalid => None,
        }
    }
}
