//! Embedded region grammars fed through the default formatter

use phonetype_core::{dialable_only, is_dialable, RegionMetadata, RegionRegistry};
use proptest::prelude::*;

fn format_all(region: &str, calling_code: u16, input: &str) -> String {
    let mut formatter = RegionRegistry::embedded().formatter_for(region, calling_code);
    let mut current = String::new();
    for ch in input.chars() {
        current = formatter.input_digit(ch);
    }
    current
}

#[test]
fn test_embedded_example_numbers() {
    let cases = [
        ("US", 1, "+12015550123", "+1 (201) 555-0123"),
        ("GB", 44, "+447400123456", "+44 7400 123456"),
        ("GB", 44, "+442071234567", "+44 20 7123 4567"),
        ("DE", 49, "+4915123456789", "+49 151 23456789"),
        ("DE", 49, "+493012345678", "+49 30 12345678"),
        ("FR", 33, "+33612345678", "+33 6 12 34 56 78"),
        ("IN", 91, "+918123456789", "+91 81234 56789"),
        ("JP", 81, "+819012345678", "+81 90-1234-5678"),
        ("JP", 81, "+81312345678", "+81 3-1234-5678"),
    ];

    for (region, code, input, expected) in cases {
        assert_eq!(
            format_all(region, code, input),
            expected,
            "Formatting {input} for {region}"
        );
    }
}

#[test]
fn test_example_mobile_lengths() {
    let registry = RegionRegistry::embedded();
    let lengths: Vec<(String, usize)> = registry
        .list_regions()
        .into_iter()
        .map(|code| {
            let example = registry
                .example_mobile_national_number(code)
                .expect("every embedded region has an example");
            (code.to_string(), example.len())
        })
        .collect();

    assert!(lengths.contains(&("US".to_string(), 10)));
    assert!(lengths.contains(&("DE".to_string(), 11)));
    assert!(lengths.contains(&("FR".to_string(), 9)));
}

#[test]
fn test_example_mobiles_fit_a_grouping_rule() {
    let registry = RegionRegistry::embedded();
    for code in registry.list_regions() {
        let region = registry.get(code).unwrap();
        let example = region.example_mobile().unwrap();
        let input = format!("+{}{}", region.calling_code(), example);
        let formatted = format_all(code, region.calling_code(), &input);
        assert!(
            formatted.contains(' '),
            "{code} example {example} should be grouped, got {formatted}"
        );
        assert_eq!(dialable_only(&formatted), input);
    }
}

proptest! {
    #[test]
    fn grouping_keeps_digits_and_never_ends_in_separator(national in "[2-9][0-9]{0,9}") {
        let input = format!("+1{national}");
        let formatted = format_all("US", 1, &input);
        prop_assert_eq!(dialable_only(&formatted), input);
        let last = formatted.chars().last().unwrap();
        prop_assert!(is_dialable(last));
    }

    #[test]
    fn formatting_is_idempotent(national in "[2-9][0-9]{2,9}") {
        let once = format_all("US", 1, &format!("+1{national}"));
        let again = format_all("US", 1, &dialable_only(&once));
        prop_assert_eq!(once, again);
    }
}
