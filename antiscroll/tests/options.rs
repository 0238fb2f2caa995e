use std::time::Duration;

use antiscroll::{DEFAULT_INITIAL_DISPLAY, Error, InitialDisplay, Options};

#[test]
fn test_defaults() {
    let options = Options::default();
    assert!(options.x);
    assert!(options.y);
    assert!(!options.force_horizontal);
    assert!(!options.force_vertical);
    assert!(options.auto_hide);
    assert_eq!(options.padding, 2.0);
    assert_eq!(
        options.initial_display,
        InitialDisplay::After(DEFAULT_INITIAL_DISPLAY)
    );
}

#[test]
fn test_from_json_fills_missing_keys_with_defaults() {
    let options = Options::from_json("{}").unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn test_from_json_reads_camel_case_keys() {
    let options = Options::from_json(
        r#"{"x": false, "forceHorizontal": true, "autoHide": false, "padding": 4}"#,
    )
    .unwrap();

    assert!(!options.x);
    assert!(options.force_horizontal);
    assert!(!options.auto_hide);
    assert_eq!(options.padding, 4.0);
    assert!(options.horizontal_enabled());
    assert!(options.vertical_enabled());
}

#[test]
fn test_initial_display_from_json() {
    let display = |json: &str| {
        Options::from_json(&format!(r#"{{"initialDisplay": {json}}}"#))
            .unwrap()
            .initial_display
    };

    assert_eq!(display("false"), InitialDisplay::Suppressed);
    assert_eq!(display("true"), InitialDisplay::default());
    assert_eq!(display("500"), InitialDisplay::After(Duration::from_millis(500)));
    assert_eq!(display("0"), InitialDisplay::default());
    assert_eq!(display("-20"), InitialDisplay::After(Duration::ZERO));
    assert_eq!(display(r#""750ms""#), InitialDisplay::After(Duration::from_millis(750)));
    assert_eq!(display(r#""soon""#), InitialDisplay::default());
}

#[test]
fn test_initial_display_null_means_default() {
    let options = Options::from_json(r#"{"initialDisplay": null, "padding": 4}"#).unwrap();
    assert_eq!(options.initial_display, InitialDisplay::default());
    assert!(!options.initial_display.is_suppressed());
    assert_eq!(options.padding, 4.0);
}

#[test]
fn test_initial_display_from_millis_truncates() {
    assert_eq!(
        InitialDisplay::from_millis(1200.9),
        InitialDisplay::After(Duration::from_millis(1200))
    );
    assert_eq!(InitialDisplay::from_millis(f64::NAN), InitialDisplay::default());
    assert!(InitialDisplay::Suppressed.is_suppressed());
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = Options::from_json(r#"{"padding": "wide"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
    assert!(err.to_string().starts_with("invalid options"));
}

#[test]
fn test_disabled_axes() {
    let options = Options::new().x(false).y(false);
    assert!(!options.horizontal_enabled());
    assert!(!options.vertical_enabled());

    let options = options.force_vertical(true);
    assert!(options.vertical_enabled());
}
