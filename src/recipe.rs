//! Recetas: cuantos ingredientes de cada tipo pide un plato y que recompensa da
use crate::{errors::KitchenError, ingredient::Ingredient};

#[derive(Debug, PartialEq)]
pub struct Recipe {
    name: String,
    required: Vec<(Ingredient, u32)>,
    time_bonus: u32,
    score_bonus: u32,
}

impl Recipe {
    pub fn new(
        name: &str,
        required: Vec<(Ingredient, u32)>,
        time_bonus: u32,
        score_bonus: u32,
    ) -> Result<Recipe, KitchenError> {
        if name.trim().is_empty() {
            return Err(KitchenError::InvalidRecipe(
                "recipe name can not be empty".to_string(),
            ));
        }
        if required.is_empty() {
            return Err(KitchenError::InvalidRecipe(format!(
                "recipe {} requires no ingredients",
                name
            )));
        }
        for (position, (ingredient, quantity)) in required.iter().enumerate() {
            if *quantity == 0 {
                return Err(KitchenError::InvalidRecipe(format!(
                    "recipe {} requires 0 of {:?}",
                    name, ingredient
                )));
            }
            if required[..position].iter().any(|(other, _)| other == ingredient) {
                return Err(KitchenError::InvalidRecipe(format!(
                    "recipe {} lists {:?} twice",
                    name, ingredient
                )));
            }
        }
        Ok(Recipe {
            name: name.to_string(),
            required,
            time_bonus,
            score_bonus,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> &[(Ingredient, u32)] {
        &self.required
    }

    /// Cantidad pedida de `ingredient`, 0 si la receta no lo usa
    pub fn required_of(&self, ingredient: Ingredient) -> u32 {
        self.required
            .iter()
            .find(|(required, _)| *required == ingredient)
            .map(|(_, quantity)| *quantity)
            .unwrap_or(0)
    }

    pub fn requires(&self, ingredient: Ingredient) -> bool {
        self.required_of(ingredient) > 0
    }

    pub fn total_required(&self) -> u32 {
        self.required.iter().map(|(_, quantity)| quantity).sum()
    }

    pub fn time_bonus(&self) -> u32 {
        self.time_bonus
    }

    pub fn score_bonus(&self) -> u32 {
        self.score_bonus
    }
}
