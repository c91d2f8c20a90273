use std::path::PathBuf;

use stretch_core::error::StretchError;
use stretch_core::filters::bounds::BoundPair;
use stretch_core::pipeline::config::{StretchConfig, StretchMode};
use stretch_core::pipeline::StretchRequest;

// ---------------------------------------------------------------------------
// StretchMode
// ---------------------------------------------------------------------------

#[test]
fn test_default_mode_is_zero_saturation() {
    assert_eq!(StretchMode::default(), StretchMode::Saturation { percent: 0.0 });
}

#[test]
fn test_mode_display() {
    assert_eq!(
        format!("{}", StretchMode::Saturation { percent: 0.35 }),
        "Saturation (0.35%)"
    );
    assert_eq!(
        format!("{}", StretchMode::Explicit { min: 10, max: 245 }),
        "Explicit (10..245)"
    );
}

#[test]
fn test_mode_to_request() {
    assert_eq!(
        StretchMode::Saturation { percent: 1.0 }.request().unwrap(),
        StretchRequest::Saturation { percent: 1.0 }
    );
    assert_eq!(
        StretchMode::Explicit { min: 10, max: 245 }.request().unwrap(),
        StretchRequest::ExplicitBounds {
            output: BoundPair::new(10, 245)
        }
    );
}

#[test]
fn test_invalid_modes_rejected() {
    assert!(matches!(
        StretchMode::Saturation { percent: 55.0 }.request(),
        Err(StretchError::InvalidSaturation { .. })
    ));
    assert!(matches!(
        StretchMode::Explicit { min: 245, max: 10 }.request(),
        Err(StretchError::InvalidExplicitBounds { .. })
    ));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_config_toml_roundtrip() {
    let config = StretchConfig {
        input: PathBuf::from("moon.png"),
        output: PathBuf::from("moon_stretched.png"),
        mode: StretchMode::Explicit { min: 16, max: 235 },
        to_gray: true,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: StretchConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed.input, config.input);
    assert_eq!(parsed.output, config.output);
    assert_eq!(parsed.mode, config.mode);
    assert!(parsed.to_gray);
}

#[test]
fn test_config_toml_defaults() {
    let parsed: StretchConfig = toml::from_str(
        r#"
input = "in.png"
output = "out.png"
"#,
    )
    .unwrap();
    assert_eq!(parsed.mode, StretchMode::default());
    assert!(!parsed.to_gray);
    assert_eq!(
        parsed.request().unwrap(),
        StretchRequest::Saturation { percent: 0.0 }
    );
}

#[test]
fn test_config_toml_saturation_table() {
    let parsed: StretchConfig = toml::from_str(
        r#"
input = "in.png"
output = "out.png"

[mode.Saturation]
percent = 0.5
"#,
    )
    .unwrap();
    assert_eq!(parsed.mode, StretchMode::Saturation { percent: 0.5 });
}

#[test]
fn test_config_json_roundtrip() {
    let config = StretchConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: StretchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.input, PathBuf::from("input.png"));
    assert_eq!(parsed.output, PathBuf::from("stretched.png"));
    assert_eq!(parsed.mode, config.mode);
}
