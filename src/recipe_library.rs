//! Catalogo de recetas disponibles en una sesion.
//!
//! El catalogo se arma la primera vez que se consulta y queda cacheado;
//! todas las ordenes comparten las mismas recetas via `Rc`.
use std::{cell::OnceCell, path::PathBuf, rc::Rc};

use log::{error, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{
    errors::KitchenError, ingredient::Ingredient, recipe::Recipe,
    recipe_reader::read_recipes_from_file,
};

enum RecipeSource {
    BuiltIn,
    File(PathBuf),
    Fixed(Vec<Rc<Recipe>>),
}

pub struct RecipeLibrary {
    source: RecipeSource,
    cache: OnceCell<Vec<Rc<Recipe>>>,
}

impl RecipeLibrary {
    pub fn built_in() -> RecipeLibrary {
        RecipeLibrary::with_source(RecipeSource::BuiltIn)
    }

    pub fn from_file<P: Into<PathBuf>>(path: P) -> RecipeLibrary {
        RecipeLibrary::with_source(RecipeSource::File(path.into()))
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> RecipeLibrary {
        let recipes = recipes.into_iter().map(Rc::new).collect();
        RecipeLibrary::with_source(RecipeSource::Fixed(recipes))
    }

    fn with_source(source: RecipeSource) -> RecipeLibrary {
        RecipeLibrary {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Todas las recetas, siempre en el mismo orden
    pub fn get_all(&self) -> &[Rc<Recipe>] {
        self.cache.get_or_init(|| self.build())
    }

    pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Rc<Recipe>, KitchenError> {
        self.get_all()
            .choose(rng)
            .cloned()
            .ok_or(KitchenError::EmptyCatalog)
    }

    pub fn get_by_name(&self, name: &str) -> Option<Rc<Recipe>> {
        self.get_all()
            .iter()
            .find(|recipe| recipe.name() == name)
            .cloned()
    }

    /// Descarta el cache, la proxima consulta vuelve a armar el catalogo
    pub fn reset(&mut self) {
        self.cache.take();
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }

    fn build(&self) -> Vec<Rc<Recipe>> {
        let recipes = match &self.source {
            RecipeSource::BuiltIn => default_recipes(),
            RecipeSource::Fixed(recipes) => return recipes.clone(),
            RecipeSource::File(path) => match read_recipes_from_file(path) {
                Ok(recipes) => recipes,
                Err(err) => {
                    error!(
                        "[CATALOG] Could not load recipes from {}: {:?}",
                        path.display(),
                        err
                    );
                    Vec::new()
                }
            },
        };
        if recipes.is_empty() {
            warn!("[CATALOG] The recipe catalog is empty");
        }
        recipes.into_iter().map(Rc::new).collect()
    }
}

fn default_recipes() -> Vec<Recipe> {
    use Ingredient::*;
    let definitions: Vec<(&str, Vec<(Ingredient, u32)>, u32, u32)> = vec![
        ("Toast", vec![(Bread, 2)], 8, 100),
        ("Cheese Toast", vec![(Bread, 2), (Cheese, 1)], 10, 150),
        ("Omelette", vec![(Cheese, 1), (Egg, 3)], 12, 200),
        ("Salad", vec![(Lettuce, 2), (Tomato, 2)], 10, 180),
        (
            "Burger",
            vec![(Bread, 2), (Lettuce, 1), (Steak, 1), (Tomato, 1)],
            15,
            300,
        ),
        ("Steak and Eggs", vec![(Egg, 2), (Steak, 1)], 12, 250),
    ];
    definitions
        .into_iter()
        .filter_map(|(name, required, time_bonus, score_bonus)| {
            match Recipe::new(name, required, time_bonus, score_bonus) {
                Ok(recipe) => Some(recipe),
                Err(err) => {
                    error!("[CATALOG] Skipping built-in recipe {}: {:?}", name, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn toast() -> Recipe {
        Recipe::new("Toast", vec![(Ingredient::Bread, 2)], 8, 100).unwrap()
    }

    fn salad() -> Recipe {
        Recipe::new(
            "Salad",
            vec![(Ingredient::Lettuce, 2), (Ingredient::Tomato, 2)],
            10,
            180,
        )
        .unwrap()
    }

    #[test]
    fn should_build_the_built_in_catalog() {
        let library = RecipeLibrary::built_in();
        assert_eq!(6, library.len());
        assert_eq!("Toast", library.get_all()[0].name());
    }

    #[test]
    fn should_return_the_same_recipes_on_every_call() {
        let library = RecipeLibrary::built_in();
        let first: Vec<Rc<Recipe>> = library.get_all().to_vec();
        let second = library.get_all();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(true, Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn should_find_a_recipe_by_exact_name() {
        let library = RecipeLibrary::from_recipes(vec![toast(), salad()]);
        assert_eq!("Salad", library.get_by_name("Salad").unwrap().name());
        assert_eq!(true, library.get_by_name("salad").is_none());
        assert_eq!(true, library.get_by_name("Pizza").is_none());
    }

    #[test]
    fn should_pick_a_random_recipe_from_the_catalog() {
        let library = RecipeLibrary::from_recipes(vec![toast(), salad()]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let recipe = library.get_random(&mut rng).unwrap();
            assert_eq!(true, recipe.name() == "Toast" || recipe.name() == "Salad");
        }
    }

    #[test]
    fn should_fail_to_pick_from_an_empty_catalog() {
        let library = RecipeLibrary::from_recipes(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(true, library.is_empty());
        assert_eq!(
            Err(KitchenError::EmptyCatalog),
            library.get_random(&mut rng).map(|_| ())
        );
    }

    #[test]
    fn should_rebuild_after_reset() {
        let mut library = RecipeLibrary::built_in();
        let before = library.get_all()[0].clone();
        library.reset();
        let after = library.get_all()[0].clone();
        assert_eq!(false, Rc::ptr_eq(&before, &after));
        assert_eq!(before.name(), after.name());
    }

    #[test]
    fn should_end_up_empty_when_the_file_is_missing() {
        let library = RecipeLibrary::from_file("there/is/no/such/recipes.json");
        assert_eq!(true, library.is_empty());
    }
}
