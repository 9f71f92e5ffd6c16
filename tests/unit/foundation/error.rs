use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShowreelError::fetch("x")
            .to_string()
            .contains("fetch error:")
    );
    assert!(
        ShowreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShowreelError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ShowreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn server_error_reports_status() {
    let err = ShowreelError::server(503, Some("maintenance".to_owned()));
    assert_eq!(err.to_string(), "server error (status 503)");
    let ShowreelError::Server { message, .. } = err else {
        panic!("expected server error");
    };
    assert_eq!(message.as_deref(), Some("maintenance"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShowreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
