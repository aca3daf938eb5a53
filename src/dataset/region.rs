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

use serde::Serialize;

use super::tables::DEFAULT_TIMEZONE;

/// Geographic region served by a landline area code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    /// Metres above sea level.
    pub altitude: f64,
    /// IANA timezone identifier.
    pub timezone: &'static str,
}

impl Region {
    /// Region in the national timezone.
    pub const fn new(name: &'static str, longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self { name, longitude, latitude, altitude, timezone: DEFAULT_TIMEZONE }
    }

    /// `(longitude, latitude)` pair.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}
