//! Ingredientes que genera el tablero y consumen las ordenes
use serde::Deserialize;

pub const TOTAL_INGREDIENTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Bread,
    Cheese,
    Egg,
    Lettuce,
    Steak,
    Tomato,
}

impl Ingredient {
    pub const ALL: [Ingredient; TOTAL_INGREDIENTS] = [
        Ingredient::Bread,
        Ingredient::Cheese,
        Ingredient::Egg,
        Ingredient::Lettuce,
        Ingredient::Steak,
        Ingredient::Tomato,
    ];

    pub fn index(self) -> usize {
        match self {
            Ingredient::Bread => 0,
            Ingredient::Cheese => 1,
            Ingredient::Egg => 2,
            Ingredient::Lettuce => 3,
            Ingredient::Steak => 4,
            Ingredient::Tomato => 5,
        }
    }
}

/// Contador de cantidades indexado por ingrediente
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngredientTally {
    counts: [u32; TOTAL_INGREDIENTS],
}

impl IngredientTally {
    pub fn new() -> IngredientTally {
        IngredientTally::default()
    }

    pub fn get(&self, ingredient: Ingredient) -> u32 {
        self.counts[ingredient.index()]
    }

    pub fn add(&mut self, ingredient: Ingredient, quantity: u32) {
        self.counts[ingredient.index()] += quantity;
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
