use vellum_fontsize::{DEFAULT_FONT_SIZE, FontSize, FontSizeOptions, MAX_FONT_SIZE, MIN_FONT_SIZE};

#[test]
fn parse_accepts_positive_integers_only() {
    assert_eq!(FontSize::parse("18"), FontSize::new(18));
    assert_eq!(FontSize::parse(" 18 "), FontSize::new(18));
    assert_eq!(FontSize::parse("007"), FontSize::new(7));

    assert_eq!(FontSize::parse("abc"), None);
    assert_eq!(FontSize::parse("0"), None);
    assert_eq!(FontSize::parse("-5"), None);
    assert_eq!(FontSize::parse("12.5"), None);
    assert_eq!(FontSize::parse(""), None);
}

#[test]
fn zero_is_not_a_font_size() {
    assert_eq!(FontSize::new(0), None);
    assert!(serde_json::from_value::<FontSize>(serde_json::json!(0)).is_err());
}

#[test]
fn options_default_covers_the_preset_range() {
    let options = FontSizeOptions::default();

    assert_eq!(options.presets.len(), 19);
    assert_eq!(options.presets.first().map(|s| s.px()), Some(MIN_FONT_SIZE));
    assert_eq!(options.presets.last().map(|s| s.px()), Some(MAX_FONT_SIZE));
    assert_eq!(options.default_size.px(), DEFAULT_FONT_SIZE);
}

#[test]
fn options_clamp_bounds_sizes() {
    let options = FontSizeOptions::default();

    assert_eq!(options.clamp(FontSize::new(100).unwrap()).px(), MAX_FONT_SIZE);
    assert_eq!(options.clamp(FontSize::new(1).unwrap()).px(), MIN_FONT_SIZE);
    assert_eq!(options.clamp(FontSize::new(20).unwrap()).px(), 20);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: FontSizeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FontSizeOptions::default());

    let options: FontSizeOptions =
        serde_json::from_str(r#"{ "presets": [12, 14, 16, 18, 20, 24], "default_size": 14 }"#)
            .unwrap();
    assert_eq!(options.presets.len(), 6);
    assert_eq!(options.default_size.px(), 14);
    assert_eq!(options.min.px(), MIN_FONT_SIZE);
}
