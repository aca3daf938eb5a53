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

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::dataset::{
    DATASET, NumberCategory, Region,
    tables::{VOIP_PREFIX, VSAT_PREFIX},
};

use super::helper_constants::{INVALID_NUMBER_HEADER, VALID_NUMBER_HEADER};

/// Category together with the data that only exists for that category.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum NumberKind {
    Mobile { carrier: &'static str },
    Landline { area_code: String, region: &'static Region },
    VoIP,
    Vsat,
    Emergency { service: &'static str },
    Invalid,
}

impl NumberKind {
    fn category(&self) -> NumberCategory {
        match self {
            NumberKind::Mobile { .. } => NumberCategory::Mobile,
            NumberKind::Landline { .. } => NumberCategory::Landline,
            NumberKind::VoIP => NumberCategory::VoIP,
            NumberKind::Vsat => NumberCategory::Vsat,
            NumberKind::Emergency { .. } => NumberCategory::Emergency,
            NumberKind::Invalid => NumberCategory::Invalid,
        }
    }
}

/// Outcome of classifying one input string.
///
/// Immutable once built. The carrier is only present for mobile numbers and
/// the area code and region only for landlines.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    original_number: String,
    clean_number: String,
    national_number: String,
    kind: NumberKind,
}

impl ClassificationResult {
    pub(super) fn new(
        original_number: String,
        clean_number: String,
        national_number: String,
        kind: NumberKind,
    ) -> Self {
        Self { original_number, clean_number, national_number, kind }
    }

    /// The input exactly as given.
    pub fn original_number(&self) -> &str {
        &self.original_number
    }

    /// The input with all noise removed. Contains only ASCII digits.
    pub fn clean_number(&self) -> &str {
        &self.clean_number
    }

    /// The digits left after stripping country code and trunk prefix.
    pub fn national_significant_number(&self) -> &str {
        &self.national_number
    }

    pub fn category(&self) -> NumberCategory {
        self.kind.category()
    }

    pub fn is_valid(&self) -> bool {
        self.kind != NumberKind::Invalid
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.kind, NumberKind::Mobile { .. })
    }

    pub fn is_landline(&self) -> bool {
        matches!(self.kind, NumberKind::Landline { .. })
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self.kind, NumberKind::Emergency { .. })
    }

    pub fn is_voip(&self) -> bool {
        self.kind == NumberKind::VoIP
    }

    pub fn is_vsat(&self) -> bool {
        self.kind == NumberKind::Vsat
    }

    pub fn carrier(&self) -> Option<&'static str> {
        match self.kind {
            NumberKind::Mobile { carrier } => Some(carrier),
            _ => None,
        }
    }

    pub fn area_code(&self) -> Option<&str> {
        match &self.kind {
            NumberKind::Landline { area_code, .. } => Some(area_code.as_str()),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&'static Region> {
        match self.kind {
            NumberKind::Landline { region, .. } => Some(region),
            _ => None,
        }
    }

    /// Name of the service reached: the emergency service for short codes,
    /// the special-service name for VoIP and VSAT numbers.
    pub fn service(&self) -> Option<&'static str> {
        match self.kind {
            NumberKind::Emergency { service } => Some(service),
            NumberKind::VoIP => DATASET.special_service(VOIP_PREFIX),
            NumberKind::Vsat => DATASET.special_service(VSAT_PREFIX),
            _ => None,
        }
    }

    /// Flattens the result into a serializable record. Absent values stay
    /// `None` and serialize as `null`.
    pub fn details(&self) -> NumberDetails {
        let region = self.region();
        NumberDetails {
            original_number: self.original_number.clone(),
            clean_number: self.clean_number.clone(),
            category: self.category(),
            valid: self.is_valid(),
            carrier: self.carrier().map(str::to_owned),
            area_code: self.area_code().map(str::to_owned),
            location: region.map(|r| r.name.to_owned()),
            coordinates: region.map(Region::coordinates),
            timezone: region.map(|r| r.timezone.to_owned()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.details())
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.details().serialize(serializer)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.details(), f)
    }
}

/// Every field of a [`ClassificationResult`] as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberDetails {
    pub original_number: String,
    pub clean_number: String,
    #[serde(rename = "type")]
    pub category: NumberCategory,
    pub valid: bool,
    pub carrier: Option<String>,
    pub area_code: Option<String>,
    pub location: Option<String>,
    /// `(longitude, latitude)`
    pub coordinates: Option<(f64, f64)>,
    pub timezone: Option<String>,
}

impl fmt::Display for NumberDetails {
    /// Multi-line summary listing only the fields the category populates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "{}{}", INVALID_NUMBER_HEADER, self.original_number);
        }
        write!(f, "{}{}", VALID_NUMBER_HEADER, self.clean_number)?;
        write!(f, "\nType: {}", self.category.label())?;
        if let Some(carrier) = &self.carrier {
            write!(f, "\nCarrier: {}", carrier)?;
        }
        if let Some(area_code) = &self.area_code {
            write!(f, "\nArea Code: {}", area_code)?;
        }
        if let Some(location) = &self.location {
            write!(f, "\nLocation: {}", location)?;
        }
        if let Some((longitude, latitude)) = self.coordinates {
            write!(f, "\nCoordinates: ({}, {})", longitude, latitude)?;
        }
        if let Some(timezone) = &self.timezone {
            write!(f, "\nTimezone: {}", timezone)?;
        }
        Ok(())
    }
}
