use std::{cell::RefCell, rc::Rc};

use crate::{
    events::{OrderEvent, OrderListener},
    ingredient::{Ingredient, IngredientTally},
};

/// Contadores de la sesion, alimentados por los eventos del gestor de ordenes
#[derive(Debug, Default)]
pub struct SessionStatistics {
    started: u64,
    completed: u64,
    expired: u64,
    collected: IngredientTally,
}

impl SessionStatistics {
    pub fn new() -> SessionStatistics {
        SessionStatistics::default()
    }

    /// Listener para suscribir al gestor; las estadisticas quedan compartidas en `statistics`
    pub fn listener(statistics: Rc<RefCell<SessionStatistics>>) -> OrderListener {
        Box::new(move |event| statistics.borrow_mut().record(event))
    }

    pub fn record(&mut self, event: &OrderEvent) {
        match event {
            OrderEvent::OrderStarted { .. } => self.started += 1,
            OrderEvent::IngredientCollected { ingredient, amount } => {
                self.collected.add(*ingredient, *amount)
            }
            OrderEvent::OrderCompleted { .. } => self.completed += 1,
            OrderEvent::OrderExpired { .. } => self.expired += 1,
        }
    }

    pub fn started(&self) -> u64 {
        self.started
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn expired(&self) -> u64 {
        self.expired
    }

    pub fn collected_of(&self, ingredient: Ingredient) -> u32 {
        self.collected.get(ingredient)
    }

    pub fn summary(&self) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders started={} completed={} expired={} | Ingredients collected |",
            self.started, self.completed, self.expired
        );
        for ingredient in Ingredient::ALL {
            statistics.push_str(&format!(" {:?}={} ", ingredient, self.collected.get(ingredient)));
        }
        statistics
    }
}
