use std::sync::Once;

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// An `env_logger` filter such as `clock_widget=debug`. Falls back to
    /// `RUST_LOG`, then to `info`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    fn filter(self) -> Option<String> {
        self.filter.or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Sets up `env_logger` on stderr. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        // stdout belongs to the command prompt
        builder.target(env_logger::Target::Stderr).init();

        log::debug!("logging initialized");
    });
}
