use adamsboot_util::errors::BootstrapError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = BootstrapError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_configuration_error_display() {
    let err = BootstrapError::configuration("No modules provided!");
    assert_eq!(err.to_string(), "Configuration error: No modules provided!");
}

#[test]
fn test_network_error_display() {
    let err = BootstrapError::Network {
        message: "timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Network error: timeout");
}

#[test]
fn test_settings_error_display() {
    let err = BootstrapError::Settings {
        message: "root element is <html>".to_string(),
    };
    assert_eq!(err.to_string(), "Settings error: root element is <html>");
}

#[test]
fn test_build_error_display() {
    let err = BootstrapError::Build {
        message: "mvn exited with code 1".to_string(),
    };
    assert_eq!(err.to_string(), "Build failed: mvn exited with code 1");
}

#[test]
fn test_generic_error_display() {
    let err = BootstrapError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_configuration_error_has_help() {
    use miette::Diagnostic;

    let err = BootstrapError::configuration("conflict");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("--list-modules"), "got: {help}");
}
