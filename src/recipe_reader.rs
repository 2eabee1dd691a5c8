use log::{debug, error, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::KitchenError;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;

#[derive(Deserialize, Debug)]
struct JsonRecipe {
    name: String,
    ingredients: HashMap<Ingredient, u32>,
    #[serde(default)]
    time_bonus: u32,
    #[serde(default)]
    score_bonus: u32,
}

#[derive(Deserialize)]
struct RecipesConfiguration {
    recipes: Vec<JsonRecipe>,
}

fn recipes_from_json(json_recipes: Vec<JsonRecipe>) -> Result<Vec<Recipe>, KitchenError> {
    let mut recipes = Vec::with_capacity(json_recipes.len());
    for json_recipe in json_recipes {
        let mut ingredients: Vec<(Ingredient, u32)> =
            json_recipe.ingredients.into_iter().collect();
        ingredients.sort_by_key(|(ingredient, _)| ingredient.index());
        let recipe = Recipe::new(
            &json_recipe.name,
            ingredients,
            json_recipe.time_bonus,
            json_recipe.score_bonus,
        )?;
        if recipes.iter().any(|loaded: &Recipe| loaded.name() == recipe.name()) {
            return Err(KitchenError::InvalidRecipe(format!(
                "recipe {} is defined twice",
                recipe.name()
            )));
        }
        debug!("[READER] Loaded recipe {}", recipe.name());
        recipes.push(recipe);
    }
    Ok(recipes)
}

/// Lee un catalogo de recetas en formato JSON desde cualquier lector
pub fn read_recipes<R: Read>(reader: R) -> Result<Vec<Recipe>, KitchenError> {
    let configuration: RecipesConfiguration = serde_json::from_reader(reader)?;
    recipes_from_json(configuration.recipes)
}

pub fn read_recipes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>, KitchenError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        error!(
            "[READER] Could not open recipes file {}: {}",
            path.as_ref().display(),
            err
        );
        KitchenError::FileReaderError
    })?;
    let recipes = read_recipes(BufReader::new(file))?;
    info!(
        "[READER] Read {} recipes from {}",
        recipes.len(),
        path.as_ref().display()
    );
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_recipes_in_file_order() {
        let json = r#"{"recipes":[
            {"name":"Toast","ingredients":{"bread":2},"time_bonus":8,"score_bonus":100},
            {"name":"Burger","ingredients":{"tomato":1,"bread":2,"steak":1}}
        ]}"#;
        let recipes = read_recipes(json.as_bytes()).unwrap();
        assert_eq!(2, recipes.len());
        assert_eq!("Toast", recipes[0].name());
        assert_eq!(8, recipes[0].time_bonus());
        assert_eq!(
            &[
                (Ingredient::Bread, 2),
                (Ingredient::Steak, 1),
                (Ingredient::Tomato, 1)
            ],
            recipes[1].required()
        );
        assert_eq!(0, recipes[1].score_bonus());
    }

    #[test]
    fn should_fail_with_an_invalid_recipe() {
        let json = r#"{"recipes":[{"name":"Toast","ingredients":{"bread":0}}]}"#;
        let result = read_recipes(json.as_bytes());
        assert!(matches!(result, Err(KitchenError::InvalidRecipe(_))));
    }

    #[test]
    fn should_fail_with_a_repeated_name() {
        let json = r#"{"recipes":[
            {"name":"Toast","ingredients":{"bread":2}},
            {"name":"Toast","ingredients":{"bread":1}}
        ]}"#;
        let result = read_recipes(json.as_bytes());
        assert!(matches!(result, Err(KitchenError::InvalidRecipe(_))));
    }

    #[test]
    fn should_fail_with_malformed_json() {
        let result = read_recipes("{\"recipes\":".as_bytes());
        assert!(matches!(result, Err(KitchenError::MalformedFile(_))));
    }

    #[test]
    fn should_fail_with_a_missing_file() {
        let result = read_recipes_from_file("there/is/no/such/recipes.json");
        assert_eq!(Err(KitchenError::FileReaderError), result.map(|_| ()));
    }
}
