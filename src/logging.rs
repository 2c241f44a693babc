//! Logger initialization.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// `filter` uses the `env_logger` syntax. When it is `None`, `RUST_LOG` is consulted and
/// `info` is used if that is unset too. Calling this more than once does nothing.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.format_timestamp(None);

        // a test harness may already have installed a logger
        if builder.try_init().is_err() {
            log::debug!("logger already installed");
        }
    });
}
