//! Una orden en curso: una receta, lo que ya se junto y el tiempo que le queda
use std::{fmt, rc::Rc};

use crate::{
    ingredient::{Ingredient, IngredientTally},
    recipe::Recipe,
};

/// Id visible de una orden. Es unico solo entre las ordenes activas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ActiveOrder {
    id: OrderId,
    serial: u64,
    recipe: Rc<Recipe>,
    collected: IngredientTally,
    remaining_time: f32,
    time_limit: f32,
}

impl ActiveOrder {
    pub fn new(recipe: Rc<Recipe>, id: OrderId, serial: u64, time_limit: f32) -> ActiveOrder {
        ActiveOrder {
            id,
            serial,
            recipe,
            collected: IngredientTally::new(),
            remaining_time: time_limit,
            time_limit,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Identificador interno, nunca se reutiliza dentro de una sesion
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn recipe(&self) -> &Rc<Recipe> {
        &self.recipe
    }

    pub fn collected_of(&self, ingredient: Ingredient) -> u32 {
        self.collected.get(ingredient)
    }

    /// Cuanto falta de `ingredient` para cubrir la receta
    pub fn missing_of(&self, ingredient: Ingredient) -> u32 {
        self.recipe
            .required_of(ingredient)
            .saturating_sub(self.collected.get(ingredient))
    }

    pub fn needs(&self, ingredient: Ingredient) -> bool {
        self.missing_of(ingredient) > 0
    }

    pub fn is_complete(&self) -> bool {
        self.recipe
            .required()
            .iter()
            .all(|(ingredient, quantity)| self.collected.get(*ingredient) >= *quantity)
    }

    pub fn progress_fraction(&self) -> f32 {
        let total = self.recipe.total_required();
        if total == 0 {
            return 0.0;
        }
        let collected: u32 = self
            .recipe
            .required()
            .iter()
            .map(|(ingredient, quantity)| self.collected.get(*ingredient).min(*quantity))
            .sum();
        collected as f32 / total as f32
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining_time
    }

    pub fn time_fraction(&self) -> f32 {
        (self.remaining_time / self.time_limit).clamp(0.0, 1.0)
    }

    /// Registra hasta `quantity` unidades, nunca mas de lo que falta.
    /// Devuelve lo que efectivamente se registro.
    pub fn apply(&mut self, ingredient: Ingredient, quantity: u32) -> u32 {
        let applied = quantity.min(self.missing_of(ingredient));
        self.collected.add(ingredient, applied);
        applied
    }

    /// Descuenta tiempo; devuelve true si la orden vencio
    pub fn advance(&mut self, delta: f32) -> bool {
        self.remaining_time -= delta;
        self.remaining_time <= 0.0
    }
}
