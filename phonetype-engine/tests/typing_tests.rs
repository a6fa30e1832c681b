//! End-to-end editing sessions against the embedded grammars

use phonetype_engine::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn typed(region: &str, calling_code: u16, keys: &str) -> PhoneInput {
    init_logging();
    let mut field = PhoneInput::new(region, calling_code).expect("Failed to create field");
    field.type_keys(keys);
    field
}

#[test]
fn test_typing_us_number() {
    init_logging();
    let mut field = PhoneInput::new("US", 1).unwrap();
    let expected = [
        ("2", 1),
        ("20", 2),
        ("(206", 4),
        ("(206) 5", 7),
        ("(206) 55", 8),
        ("(206) 555", 9),
        ("(206) 555-0", 11),
        ("(206) 555-01", 12),
        ("(206) 555-010", 13),
        ("(206) 555-0100", 14),
    ];

    for (key, (text, cursor)) in "2065550100".chars().zip(expected) {
        field.type_keys(&key.to_string());
        assert_eq!(field.text(), text);
        assert_eq!(field.cursor(), cursor);
        assert_eq!(field.mode(), EngineMode::Active);
    }
}

#[test]
fn test_eleventh_digit_is_rejected() {
    let mut field = typed("US", 1, "2065550100");
    let reaction = field.type_keys("9");
    assert_eq!(field.text(), "(206) 555-0100");
    assert_eq!(field.cursor(), 14);
    assert_eq!(
        reaction,
        Reaction::Replace(Edit {
            text: "(206) 555-0100".to_string(),
            cursor: 14,
        })
    );
}

#[test]
fn test_paste_with_extension_stops_until_cleared() {
    init_logging();
    let mut field = PhoneInput::new("US", 1).unwrap();

    assert_eq!(field.paste("206-555-0100 ext"), Reaction::NoOp);
    assert_eq!(field.mode(), EngineMode::Stopped);
    assert_eq!(field.text(), "206-555-0100 ext");

    field.type_keys("12");
    assert_eq!(field.text(), "206-555-0100 ext12");
    assert_eq!(field.mode(), EngineMode::Stopped);

    // Deleting back to a digit-only prefix does not re-arm
    for _ in 0..6 {
        field.backspace();
    }
    assert_eq!(field.text(), "206-555-0100");
    assert_eq!(field.mode(), EngineMode::Stopped);

    field.clear();
    assert_eq!(field.text(), "");
    assert_eq!(field.mode(), EngineMode::Active);

    field.type_keys("206");
    assert_eq!(field.text(), "(206");
}

#[test]
fn test_paste_digits_is_grouped() {
    init_logging();
    let mut field = PhoneInput::new("US", 1).unwrap();
    field.paste("2065550100");
    assert_eq!(field.text(), "(206) 555-0100");
    assert_eq!(field.cursor(), 14);
}

#[test]
fn test_backspace_at_end() {
    let mut field = typed("US", 1, "2065550100");

    field.backspace();
    assert_eq!(field.text(), "(206) 555-010");
    assert_eq!(field.cursor(), 13);

    field.backspace();
    field.backspace();
    field.backspace();
    // The dangling dash is dropped rather than left for the next backspace
    assert_eq!(field.text(), "(206) 555");
    assert_eq!(field.cursor(), 9);
    assert_eq!(field.mode(), EngineMode::Active);

    field.backspace();
    assert_eq!(field.text(), "(206) 55");
}

#[test]
fn test_insert_in_the_middle_tracks_digit() {
    let mut field = typed("US", 1, "206555010");
    assert_eq!(field.text(), "(206) 555-010");

    // "(20|6) 555-010"
    field.set_cursor(3);
    field.type_keys("9");
    assert_eq!(field.text(), "(209) 655-5010");
    assert_eq!(field.cursor(), 4);

    // "(209)| 655-5010" types after the third digit, landing after the fourth
    field.set_cursor(5);
    field.type_keys("1");
    assert_eq!(field.text(), "(209) 165-5501");
    assert_eq!(field.cursor(), 7);
}

#[test]
fn test_forward_delete_keeps_cursor_off_separator() {
    let mut field = typed("US", 1, "2065550100");

    // "(206) 555-|0100"
    field.set_cursor(10);
    let reaction = field.delete_forward();
    assert_eq!(field.text(), "(206) 555-100");
    assert_eq!(field.cursor(), 9);
    assert_eq!(
        reaction,
        Reaction::Replace(Edit {
            text: "(206) 555-100".to_string(),
            cursor: 9,
        })
    );
}

#[test]
fn test_deleting_separator_stops() {
    let mut field = typed("US", 1, "2065550100");

    // "(206) 555-|0100", backspace eats the dash
    field.set_cursor(10);
    assert_eq!(field.backspace(), Reaction::NoOp);
    assert_eq!(field.text(), "(206) 5550100");
    assert_eq!(field.mode(), EngineMode::Stopped);
}

#[test]
fn test_delete_in_the_middle_regroups() {
    let mut field = typed("US", 1, "2065550100");

    // "(206) 5|55-0100"
    field.set_cursor(7);
    field.backspace();
    assert_eq!(field.text(), "(206) 550-100");
    assert_eq!(field.cursor(), 4);
}

#[test]
fn test_trunk_prefix_dropped_once_number_is_complete() {
    let mut field = typed("US", 1, "1206");
    assert_eq!(field.text(), "1206");

    field.type_keys("555010");
    assert_eq!(field.text(), "1206555010");

    field.type_keys("0");
    assert_eq!(field.text(), "(206) 555-0100");
    assert_eq!(field.cursor(), 14);

    let field = typed("FR", 33, "0612345678");
    assert_eq!(field.text(), "6 12 34 56 78");
}

#[test]
fn test_leading_one_stays_while_typing() {
    init_logging();
    let mut field = PhoneInput::new("US", 1).unwrap();
    for (key, text) in [("1", "1"), ("3", "13"), ("6", "136")] {
        field.type_keys(key);
        assert_eq!(field.text(), text);
        assert_eq!(field.cursor(), text.len());
    }
}

#[test]
fn test_leading_one_typed_before_number_is_kept() {
    let mut field = typed("US", 1, "3648082");
    assert_eq!(field.text(), "(364) 808-2");

    field.set_cursor(0);
    let reaction = field.type_keys("1");
    assert_eq!(field.text(), "13648082");
    assert_eq!(field.cursor(), 1);
    assert_eq!(
        reaction,
        Reaction::Replace(Edit {
            text: "13648082".to_string(),
            cursor: 1,
        })
    );
}

#[test]
fn test_other_regions() {
    assert_eq!(typed("GB", 44, "7400123456").text(), "7400 123456");
    assert_eq!(typed("GB", 44, "2071234567").text(), "20 7123 4567");
    assert_eq!(typed("DE", 49, "15123456789").text(), "151 23456789");
    assert_eq!(typed("IN", 91, "8123456789").text(), "81234 56789");
    assert_eq!(typed("JP", 81, "9012345678").text(), "90-1234-5678");
}

#[test]
fn test_country_change_regroups_content() {
    let mut field = typed("US", 1, "7400123456");
    assert_eq!(field.text(), "(740) 012-3456");

    field.set_region("GB", 44).unwrap();
    assert_eq!(field.text(), "7400 123456");
    assert_eq!(field.cursor(), 11);
    assert_eq!(field.mode(), EngineMode::Active);
    assert_eq!(field.engine().config().region_code, "GB");
    assert_eq!(field.engine().config().expected_national_digits, 10);
    assert_eq!(field.engine().last_formatted(), Some("7400 123456"));
}

#[test]
fn test_country_change_on_empty_field() {
    init_logging();
    let mut field = PhoneInput::new("US", 1).unwrap();
    field.set_region("JP", 81).unwrap();
    assert_eq!(field.text(), "");
    field.type_keys("9012345678");
    assert_eq!(field.text(), "90-1234-5678");
}

#[test]
fn test_country_change_while_stopped() {
    let mut field = PhoneInput::new("US", 1).unwrap();
    field.paste("206 ext");
    field.set_region("GB", 44).unwrap();
    assert_eq!(field.text(), "206");
    assert_eq!(field.mode(), EngineMode::Stopped);
}

#[test]
fn test_invalid_country_change() {
    let mut field = typed("US", 1, "206555");
    match field.set_region("", 44) {
        Err(EngineError::InvalidConfig(_)) => {}
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
    assert_eq!(field.text(), "(206) 555");
    assert_eq!(field.engine().config().region_code, "US");
}

#[test]
fn test_unknown_region_passes_digits() {
    let field = typed("ZZ", 999, "123456789012");
    assert_eq!(field.text(), "123456789012");
    assert_eq!(field.mode(), EngineMode::Active);
}

/// Buffer that counts the writes it receives
struct RecordingBuffer {
    inner: EditableText,
    writes: usize,
}

impl TextBuffer for RecordingBuffer {
    fn text(&self) -> &str {
        self.inner.text()
    }

    fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    fn replace_all(&mut self, text: &str) -> TextChange {
        self.writes += 1;
        self.inner.replace_all(text)
    }

    fn set_cursor(&mut self, offset: usize) {
        self.inner.set_cursor(offset);
    }
}

#[test]
fn test_engine_write_is_not_reformatted_again() {
    init_logging();
    let mut engine = ReformatEngine::new("US", 1).unwrap();
    let mut buffer = RecordingBuffer {
        inner: EditableText::new(),
        writes: 0,
    };

    for key in "2065550100".chars() {
        let before = buffer.writes;
        let change = buffer.inner.insert(&key.to_string());
        engine.apply(&mut buffer, &change);
        assert!(buffer.writes - before <= 1);
        assert!(!engine.is_self_change());
        assert_eq!(engine.mode(), EngineMode::Active);
    }

    assert_eq!(buffer.text(), "(206) 555-0100");
}

#[test]
fn test_unguarded_echo_would_stop_formatting() {
    let mut engine = ReformatEngine::new("US", 1).unwrap();
    let mut buffer = EditableText::with_text("2065");

    let change = TextChange::splice("206", 3, 0, "5");
    let edit = engine.on_change(&change).edit().cloned().unwrap();

    // A host that writes without the guard feeds its own separators back in
    let echo = buffer.replace_all(&edit.text);
    engine.on_change(&echo);
    assert_eq!(engine.mode(), EngineMode::Stopped);
}

#[test]
fn test_custom_registry() {
    let mut registry = RegionRegistry::with_embedded();
    registry
        .load_toml(
            r#"
            [metadata]
            code = "US"
            name = "United States (dashes)"
            calling_code = 1
            national_prefix = "1"
            example_mobile = "2015550123"

            [[formats]]
            groups = [3, 3, 4]
            template = "$1-$2-$3"
        "#,
        )
        .unwrap();

    let engine = ReformatEngine::with_registry(std::sync::Arc::new(registry), "US", 1).unwrap();
    let mut field = PhoneInput::with_engine(engine);
    field.type_keys("2065550100");
    assert_eq!(field.text(), "206-555-0100");
}
