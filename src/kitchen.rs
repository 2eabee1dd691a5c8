//! Sesion de cocina sin interfaz: el tablero se simula con matches al azar
//! y el loop de frames mueve el nivel y las ordenes.
use std::{cell::RefCell, rc::Rc};

use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    config::KitchenConfig,
    constants::{
        FRAME_DELTA, MATCH_PROBABILITY_PER_FRAME, MAX_FRAMES, STATISTICS_EVERY_N_FRAMES,
        USEFUL_MATCH_PROBABILITY,
    },
    ingredient::Ingredient,
    level::{LevelData, LevelState},
    order_manager::{BoardPosition, OrderManager},
    recipe_library::RecipeLibrary,
    statistics::SessionStatistics,
};

const BOARD_SIZE: u32 = 8;

pub struct Kitchen {
    manager: OrderManager<LevelData>,
    statistics: Rc<RefCell<SessionStatistics>>,
    board_rng: StdRng,
}

impl Kitchen {
    pub fn new(config: &KitchenConfig) -> Kitchen {
        let library = match &config.recipes_path {
            Some(path) => RecipeLibrary::from_file(path),
            None => RecipeLibrary::built_in(),
        };
        let mut manager = OrderManager::new(
            config,
            library,
            LevelData::new(config.level_time_budget),
        );
        let statistics = Rc::new(RefCell::new(SessionStatistics::new()));
        manager.subscribe(SessionStatistics::listener(statistics.clone()));

        let board_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        Kitchen {
            manager,
            statistics,
            board_rng,
        }
    }

    /// Llena la cocina con ordenes hasta el maximo permitido
    pub fn open(&mut self) {
        for _ in self.manager.active_order_count()..self.manager.max_concurrent_orders() {
            if self.manager.start_new_order(None).is_none() {
                break;
            }
        }
    }

    pub fn run(&mut self) -> LevelState {
        self.open();
        let mut frame: u64 = 0;
        while !self.manager.level().is_over() && frame < MAX_FRAMES {
            self.step(FRAME_DELTA);
            frame += 1;
            if frame % STATISTICS_EVERY_N_FRAMES == 0 {
                info!("{}", self.statistics.borrow().summary());
            }
        }
        info!("{}", self.statistics.borrow().summary());
        info!(
            "[KITCHEN] Session over after {} frames: {:?}, {} orders completed, score {}",
            frame,
            self.manager.level().state(),
            self.manager.completed_order_count(),
            self.manager.score()
        );
        self.manager.level().state()
    }

    pub fn step(&mut self, delta: f32) {
        self.manager.level_mut().tick(delta);
        if self.manager.level().is_over() {
            return;
        }
        self.manager.tick(delta);
        if let Some((ingredient, quantity, position)) = self.simulate_match() {
            self.manager
                .collect_ingredient(ingredient, quantity, Some(position));
        }
    }

    fn simulate_match(&mut self) -> Option<(Ingredient, u32, BoardPosition)> {
        if !self.board_rng.gen_bool(MATCH_PROBABILITY_PER_FRAME) {
            return None;
        }
        let orders = self.manager.active_orders();
        let wanted: Vec<Ingredient> = Ingredient::ALL
            .iter()
            .copied()
            .filter(|ingredient| orders.iter().any(|order| order.needs(*ingredient)))
            .collect();
        let useful = !wanted.is_empty() && self.board_rng.gen_bool(USEFUL_MATCH_PROBABILITY);
        let ingredient = if useful {
            *wanted.choose(&mut self.board_rng)?
        } else {
            *Ingredient::ALL.choose(&mut self.board_rng)?
        };
        let quantity = self.board_rng.gen_range(1, 4);
        let position = BoardPosition {
            x: self.board_rng.gen_range(0, BOARD_SIZE) as f32,
            y: self.board_rng.gen_range(0, BOARD_SIZE) as f32,
        };
        Some((ingredient, quantity, position))
    }

    pub fn manager(&self) -> &OrderManager<LevelData> {
        &self.manager
    }

    pub fn statistics(&self) -> Rc<RefCell<SessionStatistics>> {
        self.statistics.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> KitchenConfig {
        KitchenConfig {
            seed: Some(3),
            ..KitchenConfig::default()
        }
    }

    #[test]
    fn should_open_with_orders_up_to_capacity() {
        let mut kitchen = Kitchen::new(&config());
        kitchen.open();
        assert_eq!(2, kitchen.manager().active_order_count());
        assert_eq!(2, kitchen.statistics().borrow().started());
    }

    #[test]
    fn should_win_with_enough_time() {
        let mut kitchen = Kitchen::new(&KitchenConfig {
            order_time_limit: 1000.0,
            level_time_budget: 1000.0,
            ..config()
        });
        assert_eq!(LevelState::Won, kitchen.run());
        assert_eq!(true, kitchen.manager().is_finished());
        assert_eq!(5, kitchen.manager().completed_order_count());
        assert_eq!(0, kitchen.statistics().borrow().expired());
    }

    #[test]
    fn should_lose_without_recipes() {
        let mut kitchen = Kitchen::new(&KitchenConfig {
            recipes_path: Some("there/is/no/such/recipes.json".to_string()),
            level_time_budget: 2.0,
            ..config()
        });
        assert_eq!(LevelState::Lost, kitchen.run());
        assert_eq!(0, kitchen.statistics().borrow().started());
    }

    #[test]
    fn should_win_quickly_with_a_single_cheap_recipe() {
        let path = std::env::temp_dir().join("cooking_orders_single_recipe.json");
        std::fs::write(
            &path,
            r#"{"recipes":[{"name":"Toast","ingredients":{"bread":1},"time_bonus":8}]}"#,
        )
        .unwrap();
        let mut kitchen = Kitchen::new(&KitchenConfig {
            recipes_path: Some(path.to_string_lossy().to_string()),
            required_orders: Some(1),
            level_time_budget: 1000.0,
            ..config()
        });
        assert_eq!(LevelState::Won, kitchen.run());
        assert_eq!(1, kitchen.statistics().borrow().completed());
    }
}
