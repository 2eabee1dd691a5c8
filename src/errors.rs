#[derive(Debug, PartialEq)]
pub enum KitchenError {
    EmptyCatalog,
    NoRecipesAvailable,
    CapacityExceeded,
    UnroutableIngredient,
    InvalidRecipe(String),
    FileReaderError,
    MalformedFile(String),
    ConfigError(String),
}

impl From<std::io::Error> for KitchenError {
    fn from(_: std::io::Error) -> Self {
        KitchenError::FileReaderError
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(error: serde_json::Error) -> Self {
        KitchenError::MalformedFile(error.to_string())
    }
}
