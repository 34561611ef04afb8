//! Tests for error types

use split_testing::{Error, ValidationError};

#[test]
fn test_validation_errors() {
    let error: Error = ValidationError::EmptyExperimentName.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("invalid experiment definition"));
    assert!(error_str.contains("experiment name must not be empty"));
    assert!(error.is_validation());

    let error: Error = ValidationError::UnnamedVariant { index: 3 }.into();
    assert!(format!("{error}").contains("index 3"));

    let error: Error = ValidationError::NoVariants.into();
    assert!(format!("{error}").contains("at least one variant"));
}

#[test]
fn test_no_store_error_has_guidance() {
    let error: Error = ValidationError::NoStore.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("no key/value store configured"));
    assert!(error_str.contains("ExperimentOptions::store"));
}

#[test]
fn test_inconsistent_state_error() {
    let error = Error::InconsistentState {
        experiment: "test1".to_string(),
        variant: "old".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("test1"));
    assert!(error_str.contains("'old'"));
    assert!(error_str.contains("Clear the stored assignment"));
    assert!(!error.is_validation());
}

#[test]
fn test_store_error() {
    let error = Error::Store("quota exceeded".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Store error"));
    assert!(error_str.contains("quota exceeded"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error: Error = io_error.into();
    assert!(format!("{error}").contains("IO error"));
}

#[test]
fn test_serialization_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").contains("Serialization error"));
}

#[test]
fn test_error_debug() {
    let error: Error = ValidationError::NoVariants.into();
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("NoVariants"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> split_testing::Result<i32> {
        Ok(42)
    }

    assert_eq!(returns_result().unwrap(), 42);
}
