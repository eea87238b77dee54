//! Subcommand implementations.

use std::path::PathBuf;

use monolog_logger::{ConfigResolver, Error, LoggerBuilder, Severity};

/// Resolve the configuration, build the pipeline, and describe it.
pub fn run_check(
    config: Option<PathBuf>,
    include: Vec<PathBuf>,
    name: &str,
    json: bool,
) -> Result<(), Error> {
    let mut resolver = ConfigResolver::new();
    for dir in include {
        resolver = resolver.with_include_dir(dir);
    }

    let document = resolver.resolve(config.as_deref())?;
    let logger = LoggerBuilder::new().build(name, Some(&document))?;

    if json {
        let handlers: Vec<serde_json::Value> = logger
            .handlers()
            .iter()
            .map(|h| {
                serde_json::json!({
                    "class": h.class(),
                    "level": h.level().name(),
                    "rank": h.level().rank(),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "logger": logger.name(),
            "handlers": handlers,
        });
        println!("{summary:#}");
    } else {
        println!(
            "logger `{}` with {} handler(s):",
            logger.name(),
            logger.handlers().len()
        );
        for (index, handler) in logger.handlers().iter().enumerate() {
            println!(
                "  {}. {} (level {})",
                index + 1,
                handler.class(),
                handler.level()
            );
        }
    }

    Ok(())
}

/// Print the severity table.
pub fn run_levels(json: bool) {
    if json {
        let table: serde_json::Map<String, serde_json::Value> = Severity::ALL
            .into_iter()
            .map(|s| (s.name().to_string(), serde_json::json!(s.rank())))
            .collect();
        println!("{:#}", serde_json::Value::Object(table));
    } else {
        for level in Severity::ALL {
            println!("{} = {}", level.name(), level.rank());
        }
    }
}
