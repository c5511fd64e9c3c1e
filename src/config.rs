use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub store_key: String,
    pub currency: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            store_key: try_load("UK_STORE_KEY", "ultrakitchen_last_order"),
            currency: try_load("UK_CURRENCY", "₦"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_defaults() {
        let config = Config::load();

        assert_eq!(config.store_key, "ultrakitchen_last_order");
        assert_eq!(config.currency, "₦");
    }
}
