use cranlock_util::errors::CranlockError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = CranlockError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = CranlockError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad syntax");
}

#[test]
fn test_input_error_display() {
    let err = CranlockError::Input {
        message: "versions.tsv line 3: missing version".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input: versions.tsv line 3: missing version"
    );
}

#[test]
fn test_network_error_display() {
    let err = CranlockError::Network {
        message: "timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Network error: timeout");
}

#[test]
fn test_process_error_display() {
    let err = CranlockError::Process {
        message: "docker exited with 1".to_string(),
    };
    assert_eq!(err.to_string(), "Process failed: docker exited with 1");
}

#[test]
fn test_generic_error_display() {
    let err = CranlockError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CranlockError = io_err.into();
    assert!(matches!(err, CranlockError::Io(_)));
}
