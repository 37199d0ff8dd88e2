// src/log.rs
//
// tracing setup for the binary. Lines carry the time since start-up;
// with a log file they go there (appended, no colours) instead of stderr.
// `RUST_LOG` wins over the verbosity flag.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Default filter: our crate at the requested level, dependencies at `warn`.
pub fn default_directives(verbosity: u8) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level(verbosity))
}

pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            crate::file::ensure_parent(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(path, e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| Error::Config(format!("logger already installed: {e}")))
}
