#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;

use mocknode_core::error::MockNodeError;
use mocknode_server::config::{self, AccessLogMode};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:26660"
  acces_log: off # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:26660");
    assert_eq!(cfg.server.access_log, AccessLogMode::Stdout);
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 26660);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, MockNodeError::UnsupportedVersion));
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn loads_from_file_or_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "version: 1\nserver:\n  listen: \"127.0.0.1:9100\"\n  access_log: tracing"
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let cfg = config::load_or_default(Some(path)).expect("must load");
    assert_eq!(cfg.server.listen, "127.0.0.1:9100");
    assert_eq!(cfg.server.access_log, AccessLogMode::Tracing);

    let cfg = config::load_or_default(None).expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:26660");
}

#[test]
fn missing_file_is_bad_config() {
    let err = config::load_from_file("/nonexistent/mocknode.yaml").expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}
