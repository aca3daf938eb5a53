//! Classification and validation of Algerian phone numbers.
//!
//! ```
//! use dz_phonenumber::{NumberCategory, classify};
//!
//! let number = classify("+213 21 23 45 67");
//! assert_eq!(number.category(), NumberCategory::Landline);
//! assert_eq!(number.region().map(|r| r.name), Some("Algiers"));
//! ```

mod classifier;
mod dataset;
pub mod interfaces;

/// Small helpers for boilerplate places where a macro name says more
/// than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use classifier::{
    ClassificationResult, NumberDetails, PHONE_NUMBER_CLASSIFIER, classify,
    classifier::PhoneNumberClassifier, errors::ClassifyError,
};
pub use dataset::{DATASET, ExpectedLength, NumberCategory, ReferenceDataset, Region};
