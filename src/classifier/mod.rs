mod classifier_regexps;
mod helper_constants;
mod helper_functions;
pub mod classification_result;
pub mod classifier;
pub mod errors;

use std::sync::LazyLock;

pub use classification_result::{ClassificationResult, NumberDetails};
use crate::classifier::classifier::PhoneNumberClassifier;

pub static PHONE_NUMBER_CLASSIFIER: LazyLock<PhoneNumberClassifier> = LazyLock::new(|| {
    PhoneNumberClassifier::new()
});

/// Classifies `phone_number` with the process-wide classifier.
pub fn classify(phone_number: &str) -> ClassificationResult {
    PHONE_NUMBER_CLASSIFIER.classify(phone_number)
}
