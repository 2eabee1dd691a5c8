//! Configuracion de una sesion de cocina, leida de un archivo JSON
use std::{fs::File, io::BufReader, io::Read, path::Path};

use log::{error, info};
use serde::Deserialize;

use crate::{constants::*, errors::KitchenError};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct KitchenConfig {
    pub max_concurrent_orders: usize,
    pub order_time_limit: f32,
    /// Ordenes completadas para ganar. `None` es una sesion sin fin.
    pub required_orders: Option<u32>,
    pub delivery_delay: f32,
    pub level_time_budget: f32,
    pub recipes_path: Option<String>,
    pub seed: Option<u64>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        KitchenConfig {
            max_concurrent_orders: MAX_CONCURRENT_ORDERS,
            order_time_limit: ORDER_TIME_LIMIT,
            required_orders: Some(REQUIRED_ORDERS),
            delivery_delay: DELIVERY_DELAY,
            level_time_budget: LEVEL_TIME_BUDGET,
            recipes_path: None,
            seed: None,
        }
    }
}

impl KitchenConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<KitchenConfig, KitchenError> {
        let config: KitchenConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<KitchenConfig, KitchenError> {
        let file = File::open(path.as_ref()).map_err(|err| {
            error!(
                "[CONFIG] Could not open {}: {}",
                path.as_ref().display(),
                err
            );
            KitchenError::FileReaderError
        })?;
        let config = KitchenConfig::from_reader(BufReader::new(file))?;
        info!("[CONFIG] Loaded {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KitchenError> {
        if self.max_concurrent_orders == 0 {
            return Err(KitchenError::ConfigError(
                "max_concurrent_orders must be at least 1".to_string(),
            ));
        }
        if !(self.order_time_limit > 0.0) {
            return Err(KitchenError::ConfigError(
                "order_time_limit must be positive".to_string(),
            ));
        }
        if !(self.delivery_delay >= 0.0) {
            return Err(KitchenError::ConfigError(
                "delivery_delay can not be negative".to_string(),
            ));
        }
        if !(self.level_time_budget > 0.0) {
            return Err(KitchenError::ConfigError(
                "level_time_budget must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config =
            KitchenConfig::from_reader("{\"max_concurrent_orders\": 3}".as_bytes()).unwrap();
        assert_eq!(3, config.max_concurrent_orders);
        assert_eq!(ORDER_TIME_LIMIT, config.order_time_limit);
        assert_eq!(Some(REQUIRED_ORDERS), config.required_orders);
        assert_eq!(None, config.recipes_path);
    }

    #[test]
    fn should_read_an_endless_session() {
        let config = KitchenConfig::from_reader("{\"required_orders\": null}".as_bytes()).unwrap();
        assert_eq!(None, config.required_orders);
    }

    #[test]
    fn should_reject_zero_concurrent_orders() {
        let result = KitchenConfig::from_reader("{\"max_concurrent_orders\": 0}".as_bytes());
        assert!(matches!(result, Err(KitchenError::ConfigError(_))));
    }

    #[test]
    fn should_reject_a_negative_delivery_delay() {
        let config = KitchenConfig {
            delivery_delay: -1.0,
            ..KitchenConfig::default()
        };
        assert!(matches!(config.validate(), Err(KitchenError::ConfigError(_))));
    }

    #[test]
    fn should_fail_with_malformed_json() {
        let result = KitchenConfig::from_reader("{\"seed\": ".as_bytes());
        assert!(matches!(result, Err(KitchenError::MalformedFile(_))));
    }

    #[test]
    fn should_accept_the_defaults() {
        assert_eq!(Ok(()), KitchenConfig::default().validate());
    }
}
