//! Server configuration tests against the real process environment
//!
//! These mutate environment variables, so they run serially.

use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use sekolah_beta::backend::server::config::CONFIG_FILE_ENV;
use sekolah_beta::backend::server::{ConfigError, ServerConfig};

const VARS: [&str; 11] = [
    CONFIG_FILE_ENV,
    "APP_DEBUG",
    "DATABASE_URL",
    "JWT_SECRET",
    "TOKEN_TTL_MINUTES",
    "SERVER_HOST",
    "SERVER_PORT",
    "FRONTEND_ORIGINS",
    "FRONTEND_DIR",
    "SEED_DATABASE",
    "BCRYPT_COST",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_from_toml_file_with_env_override() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
debug = true
port = 9001
jwt_secret = "from-file"
frontend_origins = ["http://school.test"]
"#
    )
    .unwrap();

    std::env::set_var(CONFIG_FILE_ENV, file.path());
    std::env::set_var("SERVER_PORT", "9002");

    let config = ServerConfig::load().unwrap();
    clear_env();

    assert!(config.debug);
    assert_eq!(config.port, 9002);
    assert_eq!(config.jwt_secret(), "from-file");
    assert_eq!(config.frontend_origins, vec!["http://school.test".to_string()]);
}

#[test]
#[serial]
fn test_load_rejects_bad_env_value() {
    clear_env();
    std::env::set_var("TOKEN_TTL_MINUTES", "soon");

    let result = ServerConfig::load();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { key: "TOKEN_TTL_MINUTES", .. })
    ));
}

#[test]
#[serial]
fn test_load_defaults_without_env() {
    clear_env();

    let config = ServerConfig::load().unwrap();

    assert_eq!(config, ServerConfig::default());
}
