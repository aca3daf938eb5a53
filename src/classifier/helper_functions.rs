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

use crate::dataset::tables::{COUNTRY_CODE, INTERNATIONAL_PREFIX, TRUNK_PREFIX};

use super::{
    classifier_regexps::ClassifierRegExps,
    helper_constants::{FULL_WIDTH_PLUS, PLUS_SIGN},
};

/// Removes every character that is not a decimal digit, keeping a plus sign
/// only when it is the first character left.
///
/// Unicode decimal digits are folded to their ASCII form. Returns
/// `Cow::Borrowed` when the input is already normalized.
pub(super) fn normalize<'a>(reg_exps: &ClassifierRegExps, phone_number: &'a str) -> Cow<'a, str> {
    if reg_exps.normalized_pattern.is_match(phone_number) {
        return Cow::Borrowed(phone_number);
    }
    let decimals = String::from(dec_from_char::normalize_decimals(phone_number))
        .replace(FULL_WIDTH_PLUS, PLUS_SIGN);
    let stripped = reg_exps.noise_pattern.replace_all(&decimals, "");

    let (sign, digits) = match stripped.strip_prefix(PLUS_SIGN) {
        Some(rest) => (PLUS_SIGN, rest),
        None => ("", stripped.as_ref()),
    };
    // plus signs past the first character carry no meaning
    Cow::Owned(fast_cat::concat_str!(sign, &digits.replace(PLUS_SIGN, "")))
}

/// Strips each prefix in turn. Returns `None` unless all of them matched.
fn strip_prefixes<'a>(phone_number: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes
        .iter()
        .try_fold(phone_number, |rest, prefix| rest.strip_prefix(prefix))
}

/// Removes the country calling code in one of its dialled forms: `+213`,
/// `00213` and finally a bare `213`. Only the first form that matches is
/// stripped.
pub(super) fn strip_country_prefix(phone_number: &str) -> &str {
    strip_prefixes(phone_number, &[PLUS_SIGN, COUNTRY_CODE])
        .or_else(|| strip_prefixes(phone_number, &[INTERNATIONAL_PREFIX, COUNTRY_CODE]))
        .or_else(|| phone_number.strip_prefix(COUNTRY_CODE))
        .unwrap_or(phone_number)
}

/// Reduces a normalized number to its national significant number: country
/// code and one trunk prefix are removed.
///
/// Returns `None` when a plus sign is left, i.e. the number carries a
/// country code other than Algeria's.
pub(super) fn national_significant_number(normalized: &str) -> Option<&str> {
    let number = strip_country_prefix(normalized);
    if number.starts_with(PLUS_SIGN) {
        return None;
    }
    Some(number.strip_prefix(TRUNK_PREFIX).unwrap_or(number))
}
