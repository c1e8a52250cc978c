//! Subscriber installation for `tracing` output.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `PLAR_LOG`, or `RUST_LOG` when
/// `PLAR_LOG` is unset.
///
/// With neither variable set nothing is installed. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = log_directives() else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("aviso: filtro de log invalido `{directives}`: {err}");
            EnvFilter::new("warn")
        });
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn log_directives() -> Option<String> {
    std::env::var("PLAR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|value| !value.trim().is_empty())
}
