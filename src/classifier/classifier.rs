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

use std::borrow::Cow;

use log::trace;

use super::{
    classification_result::{ClassificationResult, NumberKind},
    classifier_regexps::ClassifierRegExps,
    errors::ClassifyError,
    helper_constants::PLUS_SIGN,
    helper_functions::{national_significant_number, normalize},
};
use crate::{
    dataset::{
        DATASET, NumberCategory, ReferenceDataset,
        tables::{
            AREA_CODE_LENGTH, LANDLINE_LEADING_DIGITS, MOBILE_LEADING_DIGITS,
            SPECIAL_LEADING_DIGITS, VOIP_PREFIX, VSAT_PREFIX,
        },
    },
    macros::owned_from_cow_or,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ClassifyError>;

pub struct PhoneNumberClassifier {
    /// Lookup tables numbers are matched against.
    dataset: &'static ReferenceDataset,

    /// Helper holding the normalization regular expressions.
    reg_exps: ClassifierRegExps,
}

impl PhoneNumberClassifier {
    pub(super) fn new() -> Self {
        Self { dataset: &DATASET, reg_exps: ClassifierRegExps::new() }
    }

    /// Normalizes `phone_number`: strips noise, folds Unicode digits to ASCII
    /// and keeps a single leading plus sign. Normalizing an already
    /// normalized number returns it unchanged.
    pub fn normalize<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        normalize(&self.reg_exps, phone_number)
    }

    /// Classifies any text. Never fails; numbers that match nothing in the
    /// numbering plan come back as [`NumberCategory::Invalid`].
    pub fn classify(&self, phone_number: &str) -> ClassificationResult {
        let mut normalized =
            owned_from_cow_or!(self.normalize(phone_number), phone_number.to_owned());
        let national_number = national_significant_number(&normalized);
        let kind = match national_number {
            Some(national_number) => self.classify_national_number(national_number),
            None => {
                trace!("Foreign country code in {:?}", phone_number);
                NumberKind::Invalid
            }
        };
        trace!(
            "Classified {:?} as {:?} (national number {:?})",
            phone_number,
            kind,
            national_number
        );
        // foreign numbers have no Algerian national number
        let national_number = national_number.unwrap_or_default().to_owned();

        if normalized.starts_with(PLUS_SIGN) {
            normalized.drain(..PLUS_SIGN.len());
        }
        ClassificationResult::new(phone_number.to_owned(), normalized, national_number, kind)
    }

    /// Classifies raw bytes. This is the only entry point that can fail, and
    /// only when the bytes are not UTF-8 text.
    pub fn classify_bytes(&self, phone_number: &[u8]) -> Result<ClassificationResult> {
        let phone_number = std::str::from_utf8(phone_number)?;
        Ok(self.classify(phone_number))
    }

    fn length_matches(&self, category: NumberCategory, len: usize) -> bool {
        self.dataset
            .expected_length(category)
            .is_some_and(|expected| expected.matches(len))
    }

    /// Matches a national significant number against the dataset. Checks run
    /// in a fixed order and the first one that applies decides.
    fn classify_national_number(&self, national_number: &str) -> NumberKind {
        let len = national_number.len();
        let leading_digit = national_number.chars().next();

        if self.length_matches(NumberCategory::Emergency, len) {
            if let Some(service) = self.dataset.emergency_service(national_number) {
                return NumberKind::Emergency { service };
            }
        }

        if self.length_matches(NumberCategory::Mobile, len) {
            return match leading_digit
                .filter(|digit| MOBILE_LEADING_DIGITS.contains(digit))
                .and_then(|digit| self.dataset.mobile_carrier(digit))
            {
                Some(carrier) => NumberKind::Mobile { carrier },
                None => {
                    trace!("Mobile length but no carrier for {:?}", leading_digit);
                    NumberKind::Invalid
                }
            };
        }

        if self.length_matches(NumberCategory::Landline, len)
            && leading_digit.is_some_and(|digit| LANDLINE_LEADING_DIGITS.contains(&digit))
        {
            let area_code = &national_number[..AREA_CODE_LENGTH];
            return match self.dataset.landline_region(area_code) {
                Some(region) => NumberKind::Landline { area_code: area_code.to_owned(), region },
                None => {
                    trace!("Unknown area code {}", area_code);
                    NumberKind::Invalid
                }
            };
        }

        if !leading_digit.is_some_and(|digit| SPECIAL_LEADING_DIGITS.contains(&digit)) {
            return NumberKind::Invalid;
        }

        if self.length_matches(NumberCategory::VoIP, len) && national_number.starts_with(VOIP_PREFIX) {
            return NumberKind::VoIP;
        }

        if self.length_matches(NumberCategory::Vsat, len) && national_number.starts_with(VSAT_PREFIX) {
            return NumberKind::Vsat;
        }

        NumberKind::Invalid
    }
}
