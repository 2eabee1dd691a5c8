//! Parametros de configuracion por defecto de la cocina

/// Cantidad maxima de ordenes activas al mismo tiempo
pub const MAX_CONCURRENT_ORDERS: usize = 2;

/// Tiempo limite (en segundos) que tiene cada orden para completarse
pub const ORDER_TIME_LIMIT: f32 = 45.0;

/// Cantidad de ordenes completadas necesarias para ganar el nivel
pub const REQUIRED_ORDERS: u32 = 5;

/// Tiempo (en segundos) que tarda un ingrediente en llegar a su orden.
/// Con 0 el ingrediente se aplica en el momento.
pub const DELIVERY_DELAY: f32 = 0.0;

/// Tiempo inicial del nivel, en segundos
pub const LEVEL_TIME_BUDGET: f32 = 120.0;

/// Duracion de un frame de la simulacion, en segundos
pub const FRAME_DELTA: f32 = 1.0 / 30.0;

/// Probabilidad de que el tablero genere un match en un frame
pub const MATCH_PROBABILITY_PER_FRAME: f64 = 0.08;

/// Probabilidad de que el ingrediente del match sea uno que alguna orden necesita
pub const USEFUL_MATCH_PROBABILITY: f64 = 0.7;

/// Cada cuantos frames se imprimen las estadisticas
pub const STATISTICS_EVERY_N_FRAMES: u64 = 300;

/// Cantidad maxima de frames que corre la simulacion
pub const MAX_FRAMES: u64 = 30 * 60 * 10;

/// Archivo de configuracion que lee el binario
pub const CONFIG_FILE: &str = "kitchen.json";
