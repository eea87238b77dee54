//! Integration tests for logger assembly from configuration documents.

use monolog_logger::{
    BuildError, ConfigDocument, LoggerBuilder, Severity, get_default_logger, get_logger,
};
use serial_test::serial;

fn document(json: serde_json::Value) -> ConfigDocument {
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_absent_config_builds_bare_logger() {
    let logger = get_logger("app", None).unwrap();
    assert_eq!(logger.name(), "app");
    assert!(logger.handlers().is_empty());
}

#[test]
fn test_handler_order_matches_config_order() {
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "NullHandler"},
            {"class": "StreamHandler"},
            {"class": "NullHandler", "parameters": {"level": "ERROR"}},
        ]
    }));

    let logger = get_logger("ordered", Some(&doc)).unwrap();
    let classes: Vec<&str> = logger.handlers().iter().map(|h| h.class()).collect();
    assert_eq!(classes, vec!["NullHandler", "StreamHandler", "NullHandler"]);
}

#[test]
fn test_unknown_handler_type_aborts_build() {
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "NullHandler"},
            {"class": "DoesNotExist"},
        ]
    }));

    let err = get_logger("app", Some(&doc)).unwrap_err();
    assert!(matches!(
        err,
        BuildError::UnknownHandlerType { class } if class == "DoesNotExist"
    ));
}

#[test]
fn test_stream_handler_level_name_is_translated() {
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "StreamHandler", "parameters": {"level": "WARNING"}},
        ]
    }));

    let logger = get_logger("app", Some(&doc)).unwrap();
    assert_eq!(logger.name(), "app");
    assert_eq!(logger.handlers().len(), 1);

    let handler = &logger.handlers()[0];
    assert_eq!(handler.class(), "StreamHandler");
    assert_eq!(handler.level(), Severity::Warning);
    assert!(handler.is_handling(Severity::Error));
    assert!(!handler.is_handling(Severity::Info));
}

#[test]
fn test_unknown_level_name_defaults_to_debug() {
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "NullHandler", "parameters": {"level": "NOT_A_LEVEL"}},
        ]
    }));

    let logger = get_logger("app", Some(&doc)).unwrap();
    assert_eq!(logger.handlers()[0].level(), Severity::Debug);
}

#[test]
fn test_integer_rank_level_passes_through() {
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "NullHandler", "parameters": {"level": 400}},
        ]
    }));

    let logger = get_logger("app", Some(&doc)).unwrap();
    assert_eq!(logger.handlers()[0].level(), Severity::Error);
}

#[test]
fn test_file_handler_built_from_config_writes_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let doc = document(serde_json::json!({
        "handlers": [
            {"class": "FileHandler", "parameters": {
                "path": path.to_str().unwrap(),
                "level": "WARNING",
            }},
        ]
    }));

    let mut logger = get_logger("app", Some(&doc)).unwrap();
    logger.log(Severity::Info, "filtered out").unwrap();
    logger.log(Severity::Critical, "kept").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "CRITICAL: kept\n");
}

#[test]
fn test_custom_registry_entry_is_used() {
    let doc = document(serde_json::json!({
        "handlers": [{"class": "Blackhole"}]
    }));

    let mut builder = LoggerBuilder::new();
    builder.registry_mut().register("Blackhole", |params| {
        Ok(Box::new(monolog_logger::NullHandler::from_parameters(
            params,
        )?))
    });

    let logger = builder.build("app", Some(&doc)).unwrap();
    assert_eq!(logger.handlers().len(), 1);
}

#[test]
#[serial]
fn test_get_default_logger_resolves_via_env_var() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("logging.json");
    std::fs::write(
        &cfg,
        "{\"handlers\": [{\"class\": \"NullHandler\", \"parameters\": {\"level\": \"INFO\"}}]}",
    )
    .unwrap();

    temp_env::with_vars([("MONOLOG_CFG", Some(cfg.to_str().unwrap()))], || {
        let logger = get_default_logger(None).unwrap();
        assert_eq!(logger.name(), "monolog");
        assert_eq!(logger.handlers().len(), 1);
        assert_eq!(logger.handlers()[0].level(), Severity::Info);
    });
}

#[test]
#[serial]
fn test_get_default_logger_propagates_resolution_failure() {
    let dir = tempfile::tempdir().unwrap();

    // Point the env var at a missing file and run from an empty directory
    // so no default monolog.cfg is found either.
    temp_env::with_vars(
        [(
            "MONOLOG_CFG",
            Some(dir.path().join("missing.json").to_str().unwrap()),
        )],
        || {
            let previous = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir.path()).unwrap();
            let result = get_default_logger(Some("app"));
            std::env::set_current_dir(previous).unwrap();

            assert!(matches!(
                result,
                Err(monolog_logger::Error::Config(
                    monolog_logger::ConfigError::NotFound { .. }
                ))
            ));
        },
    );
}
