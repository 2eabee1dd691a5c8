use std::path::Path;

use cooking_orders::{config::KitchenConfig, constants::CONFIG_FILE, kitchen::Kitchen};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let config = if Path::new(CONFIG_FILE).exists() {
        match KitchenConfig::from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(err) => {
                error!("[KITCHEN] Invalid configuration in {}: {:?}", CONFIG_FILE, err);
                return;
            }
        }
    } else {
        info!("[KITCHEN] No {} found, using defaults", CONFIG_FILE);
        KitchenConfig::default()
    };

    let mut kitchen = Kitchen::new(&config);
    let result = kitchen.run();
    info!("[KITCHEN] Level finished: {:?}", result);
}
