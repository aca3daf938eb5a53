use crate::{
    ClassificationResult, ClassifyError, NumberCategory, NumberDetails, PHONE_NUMBER_CLASSIFIER,
    PhoneNumberClassifier, classify, interfaces::NumberFormatter,
};

use super::init_logging;

fn get_classifier() -> &'static PhoneNumberClassifier {
    init_logging();
    &PHONE_NUMBER_CLASSIFIER
}

fn assert_invariants(result: &ClassificationResult) {
    assert_eq!(result.is_valid(), result.category() != NumberCategory::Invalid);
    assert_eq!(result.carrier().is_some(), result.category() == NumberCategory::Mobile);
    assert_eq!(result.area_code().is_some(), result.category() == NumberCategory::Landline);
    assert_eq!(result.region().is_some(), result.category() == NumberCategory::Landline);
    assert!(result.clean_number().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn classify_mobile_numbers() {
    let classifier = get_classifier();
    for (leading_digit, carrier) in [('5', "Ooredoo"), ('6', "Mobilis"), ('7', "Djezzy")] {
        for subscriber in ["00000000", "59123456", "99999999"] {
            let input = format!("0{}{}", leading_digit, subscriber);
            let result = classifier.classify(&input);
            assert_invariants(&result);
            assert!(result.is_valid(), "{}", input);
            assert!(result.is_mobile());
            assert_eq!(result.category(), NumberCategory::Mobile);
            assert_eq!(result.carrier(), Some(carrier));
            assert_eq!(result.national_significant_number(), &input[1..]);
        }
    }
}

#[test]
fn classify_mobile_with_wrong_leading_digit() {
    let classifier = get_classifier();
    for input in ["0259123456", "0859123456", "0959123456", "0159123456"] {
        let result = classifier.classify(input);
        assert_invariants(&result);
        assert!(!result.is_valid(), "{}", input);
        assert_eq!(result.category(), NumberCategory::Invalid);
        assert_eq!(result.carrier(), None);
    }
}

#[test]
fn classify_landline_numbers() {
    let classifier = get_classifier();
    let result = classifier.classify("021 23 45 67");
    assert_invariants(&result);
    assert!(result.is_valid());
    assert!(result.is_landline());
    assert_eq!(result.area_code(), Some("21"));
    let region = result.region().unwrap();
    assert_eq!(region.name, "Algiers");
    assert_eq!(region.timezone, "Africa/Algiers");

    for area_code in crate::DATASET.area_codes() {
        let input = format!("+213 {} 12 34 56", area_code);
        let result = classifier.classify(&input);
        assert_invariants(&result);
        assert!(result.is_landline(), "{}", input);
        assert_eq!(result.area_code(), Some(area_code));
        assert_eq!(
            result.region().map(|r| r.name),
            crate::DATASET.landline_region(area_code).map(|r| r.name)
        );
    }
}

#[test]
fn classify_landline_with_unknown_area_code() {
    let classifier = get_classifier();
    for input in ["022123456", "040123456", "047123456"] {
        let result = classifier.classify(input);
        assert_invariants(&result);
        assert!(!result.is_valid(), "{}", input);
        assert_eq!(result.area_code(), None);
        assert_eq!(result.region(), None);
    }
}

#[test]
fn classify_voip_and_vsat() {
    let classifier = get_classifier();

    let result = classifier.classify("98123456");
    assert_invariants(&result);
    assert!(result.is_valid());
    assert!(result.is_voip());
    assert_eq!(result.category(), NumberCategory::VoIP);
    assert_eq!(result.service(), Some("VOIP"));

    let result = classifier.classify("096 12 34 56");
    assert_invariants(&result);
    assert!(result.is_valid());
    assert!(result.is_vsat());
    assert_eq!(result.service(), Some("VSAT"));

    // IoT prefix has no category of its own
    let result = classifier.classify("97123456");
    assert!(!result.is_valid());

    // right prefix, wrong length
    assert!(!classifier.classify("9812345").is_valid());
    assert!(!classifier.classify("981234567").is_valid());
}

#[test]
fn classify_emergency_numbers() {
    let classifier = get_classifier();
    let result = classifier.classify("17");
    assert_invariants(&result);
    assert!(result.is_valid());
    assert!(result.is_emergency());
    assert_eq!(result.service(), Some("Police (Short Code)"));

    for input in ["14", "1548", "1055", "10-54", "1021", "1040", "1234", "1235", "017"] {
        let result = classifier.classify(input);
        assert!(result.is_emergency(), "{}", input);
    }

    let result = classifier.classify("170");
    assert_invariants(&result);
    assert!(!result.is_valid());
    assert!(!result.is_emergency());
}

#[test]
fn classify_invalid_inputs() {
    let classifier = get_classifier();
    for input in [
        "123", "5591234", "", "   ", "hello", "+", "0", "00", "+33 1 23 45 67 89",
        "05591234567", "213", "+213",
    ] {
        let result = classifier.classify(input);
        assert_invariants(&result);
        assert!(!result.is_valid(), "{:?}", input);
        assert_eq!(result.category(), NumberCategory::Invalid);
        assert_eq!(result.original_number(), input);
    }
}

#[test]
fn classify_rejects_foreign_country_codes() {
    let classifier = get_classifier();
    // same lengths as valid national numbers once the plus is dropped
    for input in ["+41 23 45 67", "+17", "+98123456", "+96123456", "+0559123456", "+00213559123456"] {
        let result = classifier.classify(input);
        assert_invariants(&result);
        assert!(!result.is_valid(), "{}", input);
        assert_eq!(result.category(), NumberCategory::Invalid);
        assert_eq!(result.national_significant_number(), "");
    }
}

#[test]
fn classify_is_prefix_independent() {
    let classifier = get_classifier();
    let inputs = [
        "+213559123456",
        "00213559123456",
        "213559123456",
        "0559123456",
        "559123456",
        "+213 (0) 559 12 34 56",
    ];
    for input in inputs {
        let result = classifier.classify(input);
        assert_eq!(result.category(), NumberCategory::Mobile, "{}", input);
        assert_eq!(result.carrier(), Some("Ooredoo"));
        assert_eq!(result.national_significant_number(), "559123456");
    }
}

#[test]
fn classify_keeps_original_and_clean_numbers() {
    let result = get_classifier().classify("+213 (559) 12-34-56");
    assert_eq!(result.original_number(), "+213 (559) 12-34-56");
    assert_eq!(result.clean_number(), "213559123456");

    let result = get_classifier().classify("٠٥٥٩١٢٣٤٥٦");
    assert_eq!(result.clean_number(), "0559123456");
    assert!(result.is_mobile());
}

#[test]
fn classify_bytes_rejects_non_utf8() {
    let classifier = get_classifier();
    let result = classifier.classify_bytes(b"0559123456").unwrap();
    assert!(result.is_mobile());

    let err = classifier.classify_bytes(&[0x30, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, ClassifyError::InvalidArgument(_)));
}

#[test]
fn free_classify_matches_classifier() {
    let classifier = get_classifier();
    for input in ["0559123456", "021234567", "17", "nope"] {
        assert_eq!(classify(input), classifier.classify(input));
    }
}

#[test]
fn normalize_is_idempotent() {
    let classifier = get_classifier();
    for input in ["+213 559-12-34-56", "(021) 23 45 67", "17", "abc"] {
        let once = classifier.normalize(input).into_owned();
        assert_eq!(classifier.normalize(&once), once);
    }
}

#[test]
fn details_of_landline() {
    let details = get_classifier().classify("021234567").details();
    assert_eq!(
        details,
        NumberDetails {
            original_number: "021234567".to_owned(),
            clean_number: "021234567".to_owned(),
            category: NumberCategory::Landline,
            valid: true,
            carrier: None,
            area_code: Some("21".to_owned()),
            location: Some("Algiers".to_owned()),
            coordinates: Some((3.0588, 36.7538)),
            timezone: Some("Africa/Algiers".to_owned()),
        }
    );
}

#[test]
fn json_has_explicit_nulls() {
    let json = get_classifier().classify("0661234567").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "mobile");
    assert_eq!(value["valid"], true);
    assert_eq!(value["carrier"], "Mobilis");
    assert!(value["area_code"].is_null());
    assert!(value["location"].is_null());
    assert!(value["coordinates"].is_null());
    assert!(value["timezone"].is_null());

    let value = serde_json::to_value(get_classifier().classify("021234567")).unwrap();
    assert_eq!(value["type"], "landline");
    assert_eq!(value["coordinates"], serde_json::json!([3.0588, 36.7538]));

    let value = serde_json::to_value(get_classifier().classify("98123456")).unwrap();
    assert_eq!(value["type"], "voip");
}

#[test]
fn serialized_details_render_the_same() {
    let classifier = get_classifier();
    for input in ["0771234567", "+213 41 12 34 56", "96123456", "1548", "123"] {
        let result = classifier.classify(input);
        let json = result.to_json().unwrap();
        let details: NumberDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(details, result.details());
        assert_eq!(details.to_string(), result.to_string());
    }
}

#[test]
fn display_lists_populated_fields() {
    let classifier = get_classifier();
    assert_eq!(
        classifier.classify("+213 21 23 45 67").to_string(),
        "Algerian Phone Number: 21321234567\n\
         Type: LANDLINE\n\
         Area Code: 21\n\
         Location: Algiers\n\
         Coordinates: (3.0588, 36.7538)\n\
         Timezone: Africa/Algiers"
    );
    assert_eq!(
        classifier.classify("0771234567").to_string(),
        "Algerian Phone Number: 0771234567\nType: MOBILE\nCarrier: Djezzy"
    );
    assert_eq!(
        classifier.classify("98123456").to_string(),
        "Algerian Phone Number: 98123456\nType: VOIP"
    );
    assert_eq!(
        classifier.classify("17").to_string(),
        "Algerian Phone Number: 17\nType: EMERGENCY"
    );
    assert_eq!(
        classifier.classify("12 3").to_string(),
        "Invalid Algerian phone number: 12 3"
    );
}

struct DigitsOnly;

impl NumberFormatter for DigitsOnly {
    type Style = ();

    fn format(&self, result: &ClassificationResult, _style: &()) -> String {
        result.national_significant_number().to_owned()
    }
}

#[test]
fn formatter_extension_point() {
    let result = get_classifier().classify("0559 12 34 56");
    assert_eq!(DigitsOnly.format(&result, &()), "559123456");
}
