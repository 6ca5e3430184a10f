use crate::config::LoggingConfig;
use crate::utils::error::{EtlError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Console output plus an optional append-only log file.
pub fn init_cli_logger(verbose: bool, logging: &LoggingConfig) -> Result<()> {
    cli_subscriber(verbose, logging)?
        .try_init()
        .map_err(|e| EtlError::ConfigError {
            message: format!("failed to install logger: {}", e),
        })
}

/// The subscriber behind [`init_cli_logger`], without installing it.
pub fn cli_subscriber(
    verbose: bool,
    logging: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("review_etl=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("review_etl=info"))
    };

    let file_layer = file_layer(logging)?;

    Ok(tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        ))
}

fn file_layer(
    logging: &LoggingConfig,
) -> Result<Option<Box<dyn Layer<Registry> + Send + Sync>>> {
    let Some(path) = logging.file.as_ref() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    // Plain lines mirror the console; JSON is for log shippers.
    let layer: Box<dyn Layer<Registry> + Send + Sync> = if logging.json {
        layer.json().boxed()
    } else {
        layer.boxed()
    };
    Ok(Some(layer))
}
