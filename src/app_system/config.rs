use tracing::warn;

/// Buffer size of the inventory request channel when none is configured.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

pub const CHANNEL_CAPACITY_VAR: &str = "INVENTORY_CHANNEL_CAPACITY";

/// Runtime settings read from the environment.
///
/// The log filter is not part of this struct: `setup_tracing` reads
/// `RUST_LOG` directly through `EnvFilter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Bad values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.channel_capacity = capacity,
                _ => warn!(
                    value = %raw,
                    default = DEFAULT_CHANNEL_CAPACITY,
                    "{} must be a positive integer; using default", CHANNEL_CAPACITY_VAR
                ),
            }
        }

        config
    }
}
