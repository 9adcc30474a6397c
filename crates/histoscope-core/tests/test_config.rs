use std::io::Write;

use approx::assert_relative_eq;
use histoscope_core::config::SlideConfig;
use histoscope_core::error::HistoscopeError;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_match_reference_slide() {
    let c = SlideConfig::default();
    assert_eq!(c.slide_id, "Image");
    assert_eq!(c.patch_extension, ".jpg");
    assert_eq!(c.grid_rows, 4);
    assert_eq!(c.grid_cols, 4);
    assert_relative_eq!(c.microns_per_pixel, 0.25);
    assert_eq!(c.magnification, "40x");
}

#[test]
fn test_parse_full_toml() {
    let c = SlideConfig::from_toml_str(
        r#"
slide_id = "Case42"
display_name = "Case 42, block A"
patch_extension = ".png"
grid_rows = 8
grid_cols = 6
microns_per_pixel = 0.5
magnification = "20x"
"#,
    )
    .unwrap();
    assert_eq!(c.slide_id, "Case42");
    assert_eq!(c.grid_rows, 8);
    assert_eq!(c.grid_cols, 6);
    assert_relative_eq!(c.microns_per_pixel, 0.5);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let c = SlideConfig::from_toml_str("slide_id = \"X\"\n").unwrap();
    assert_eq!(c.slide_id, "X");
    assert_eq!(c.grid_rows, 4);
    assert_relative_eq!(c.microns_per_pixel, 0.25);
}

#[test]
fn test_invalid_toml_is_config_error() {
    assert!(matches!(
        SlideConfig::from_toml_str("grid_rows = \"four\""),
        Err(HistoscopeError::InvalidConfig(_))
    ));
}

#[test]
fn test_zero_grid_rejected() {
    assert!(SlideConfig::from_toml_str("grid_rows = 0").is_err());
}

#[test]
fn test_nonpositive_scale_rejected() {
    assert!(SlideConfig::from_toml_str("microns_per_pixel = 0.0").is_err());
    assert!(SlideConfig::from_toml_str("microns_per_pixel = -0.25").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "slide_id = \"FromDisk\"").unwrap();
    writeln!(file, "grid_rows = 5").unwrap();

    let c = SlideConfig::load(file.path()).unwrap();
    assert_eq!(c.slide_id, "FromDisk");
    assert_eq!(c.grid_rows, 5);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = SlideConfig::load(std::path::Path::new("/nonexistent/histoscope.toml")).unwrap_err();
    assert!(matches!(err, HistoscopeError::Io(_)));
}
