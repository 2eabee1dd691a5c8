//! Gestor de ordenes. Recibe los ingredientes que genera el tablero, los
//! reparte entre las ordenes activas y dispara completado, vencimiento y
//! reposicion de ordenes.
//!
//! Un ingrediente puede quedar "en vuelo" mientras la presentacion lo anima
//! hacia su orden. La entrega se resuelve despues, contra el estado de ese
//! momento: si la orden ya no existe la entrega no hace nada, y nunca se
//! registra mas de lo que la receta pide.
use std::rc::Rc;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    active_orders::ActiveOrders,
    config::KitchenConfig,
    errors::KitchenError,
    events::{EventDispatcher, OrderEvent, OrderListener, SubscriberId},
    ingredient::Ingredient,
    level::LevelController,
    order::{ActiveOrder, OrderId},
    recipe::Recipe,
    recipe_library::RecipeLibrary,
};

/// Posicion en el tablero desde donde sale el ingrediente
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelivery {
    id: DeliveryId,
    order_id: OrderId,
    order_serial: u64,
    ingredient: Ingredient,
    quantity: u32,
    origin: Option<BoardPosition>,
    remaining_delay: f32,
}

impl PendingDelivery {
    pub fn id(&self) -> DeliveryId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn ingredient(&self) -> Ingredient {
        self.ingredient
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn origin(&self) -> Option<BoardPosition> {
        self.origin
    }

    pub fn remaining_delay(&self) -> f32 {
        self.remaining_delay
    }
}

/// Resultado de entregar un ingrediente al gestor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollectOutcome {
    Applied { order_id: OrderId, amount: u32 },
    InFlight { delivery: DeliveryId, order_id: OrderId, amount: u32 },
    Dropped,
}

pub struct OrderManager<L: LevelController> {
    library: RecipeLibrary,
    orders: ActiveOrders,
    dispatcher: EventDispatcher,
    level: L,
    rng: StdRng,
    deliveries: Vec<PendingDelivery>,
    max_concurrent: usize,
    time_limit: f32,
    delivery_delay: f32,
    required_orders: Option<u32>,
    completed_orders: u32,
    score: u64,
    finished: bool,
    next_serial: u64,
    next_delivery: u64,
}

impl<L: LevelController> OrderManager<L> {
    pub fn new(config: &KitchenConfig, library: RecipeLibrary, level: L) -> OrderManager<L> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        OrderManager {
            library,
            orders: ActiveOrders::new(),
            dispatcher: EventDispatcher::new(),
            level,
            rng,
            deliveries: Vec::new(),
            max_concurrent: config.max_concurrent_orders,
            time_limit: config.order_time_limit,
            delivery_delay: config.delivery_delay,
            required_orders: config.required_orders,
            completed_orders: 0,
            score: 0,
            finished: false,
            next_serial: 1,
            next_delivery: 1,
        }
    }

    pub fn subscribe(&mut self, listener: OrderListener) -> SubscriberId {
        self.dispatcher.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    /// Arranca una orden con `recipe`, o con una receta al azar del catalogo.
    /// Si no hay lugar o no hay recetas no hace nada.
    pub fn start_new_order(&mut self, recipe: Option<Rc<Recipe>>) -> Option<OrderId> {
        if self.finished {
            info!("[ORDERS] Session already finished, not starting a new order");
            return None;
        }
        match self.try_start_order(recipe) {
            Ok(id) => Some(id),
            Err(KitchenError::CapacityExceeded) => {
                info!(
                    "[ORDERS] Max concurrent orders reached ({}), skipping new order",
                    self.max_concurrent
                );
                None
            }
            Err(err) => {
                warn!("[ORDERS] Could not start a new order: {:?}", err);
                None
            }
        }
    }

    fn try_start_order(&mut self, recipe: Option<Rc<Recipe>>) -> Result<OrderId, KitchenError> {
        if self.orders.len() >= self.max_concurrent {
            return Err(KitchenError::CapacityExceeded);
        }
        let recipe = match recipe {
            Some(recipe) => recipe,
            None => self
                .library
                .get_random(&mut self.rng)
                .map_err(|_| KitchenError::NoRecipesAvailable)?,
        };
        let id = self.orders.next_id();
        let serial = self.next_serial;
        self.next_serial += 1;
        self.orders.push(ActiveOrder::new(
            recipe.clone(),
            id,
            serial,
            self.time_limit,
        ));
        info!("[ORDERS] Started order {} ({})", id, recipe.name());
        self.dispatcher.emit(OrderEvent::OrderStarted {
            order_id: id,
            recipe,
        });
        Ok(id)
    }

    /// Entrega `quantity` unidades de `ingredient` a la primera orden que lo
    /// necesite. Lo que exceda lo que falta en esa orden se descarta.
    ///
    /// El ruteo mira solo lo ya registrado: las unidades en vuelo no reservan
    /// lugar. Dos entregas en vuelo pueden ir a la misma orden y la segunda
    /// termina sin efecto aunque otra orden siga necesitando el ingrediente.
    pub fn collect_ingredient(
        &mut self,
        ingredient: Ingredient,
        quantity: u32,
        origin: Option<BoardPosition>,
    ) -> CollectOutcome {
        if quantity == 0 {
            return CollectOutcome::Dropped;
        }
        let (order_id, order_serial, missing) = match self.orders.first_needing(ingredient) {
            Some(order) => (order.id(), order.serial(), order.missing_of(ingredient)),
            None => {
                debug!(
                    "[ORDERS] {:?}: {:?}x{} discarded",
                    KitchenError::UnroutableIngredient,
                    ingredient,
                    quantity
                );
                return CollectOutcome::Dropped;
            }
        };
        let amount = quantity.min(missing);
        if amount < quantity {
            debug!(
                "[ORDERS] Order {} only needs {} of {:?}, discarding {}",
                order_id,
                amount,
                ingredient,
                quantity - amount
            );
        }

        let delivery = PendingDelivery {
            id: DeliveryId(self.next_delivery),
            order_id,
            order_serial,
            ingredient,
            quantity: amount,
            origin,
            remaining_delay: self.delivery_delay,
        };
        self.next_delivery += 1;

        if self.delivery_delay <= 0.0 {
            let amount = self.resolve_delivery(delivery);
            return CollectOutcome::Applied { order_id, amount };
        }
        debug!(
            "[ORDERS] {:?}x{} in flight to order {}",
            ingredient, amount, order_id
        );
        let id = delivery.id;
        self.deliveries.push(delivery);
        CollectOutcome::InFlight {
            delivery: id,
            order_id,
            amount,
        }
    }

    /// La presentacion termino de animar la entrega: se aplica ahora.
    /// Devuelve false si la entrega ya no estaba pendiente.
    pub fn finish_delivery(&mut self, id: DeliveryId) -> bool {
        let position = match self.deliveries.iter().position(|delivery| delivery.id == id) {
            Some(position) => position,
            None => return false,
        };
        let delivery = self.deliveries.remove(position);
        self.resolve_delivery(delivery);
        true
    }

    fn resolve_delivery(&mut self, delivery: PendingDelivery) -> u32 {
        let order = match self.orders.find_by_serial_mut(delivery.order_serial) {
            Some(order) => order,
            None => {
                debug!(
                    "[ORDERS] Order {} is gone, dropping {:?}x{}",
                    delivery.order_id, delivery.ingredient, delivery.quantity
                );
                return 0;
            }
        };
        let applied = order.apply(delivery.ingredient, delivery.quantity);
        let complete = order.is_complete();
        if applied == 0 {
            debug!(
                "[ORDERS] Order {} no longer needs {:?}",
                delivery.order_id, delivery.ingredient
            );
            return 0;
        }

        self.dispatcher.emit(OrderEvent::IngredientCollected {
            ingredient: delivery.ingredient,
            amount: applied,
        });
        if complete {
            self.complete_order(delivery.order_serial);
        }
        applied
    }

    fn complete_order(&mut self, serial: u64) {
        let order = match self.orders.remove_by_serial(serial) {
            Some(order) => order,
            None => return,
        };
        self.deliveries.retain(|delivery| delivery.order_serial != serial);
        let recipe = order.recipe().clone();

        self.completed_orders += 1;
        self.score += recipe.score_bonus() as u64;
        self.level.add_time_bonus(recipe.time_bonus());
        info!(
            "[ORDERS] Completed order {} ({}), {} completed so far",
            order.id(),
            recipe.name(),
            self.completed_orders
        );
        self.dispatcher.emit(OrderEvent::OrderCompleted {
            recipe,
            order_id: order.id(),
        });

        if self.goal_reached() {
            self.finished = true;
            info!("[ORDERS] All {} orders finished", self.completed_orders);
            self.level.all_goals_finished();
        } else {
            self.start_new_order(None);
        }
    }

    fn goal_reached(&self) -> bool {
        match self.required_orders {
            Some(required) => self.completed_orders >= required,
            None => false,
        }
    }

    /// Avanza un frame: primero las entregas en vuelo, despues los relojes de las ordenes
    pub fn tick(&mut self, delta: f32) {
        if delta <= 0.0 {
            return;
        }
        let first_new_serial = self.next_serial;
        self.advance_deliveries(delta);

        let mut expired = Vec::new();
        for order in self.orders.iter_mut() {
            if order.serial() >= first_new_serial {
                continue;
            }
            if order.advance(delta) {
                expired.push(order.serial());
            }
        }
        for serial in expired {
            self.expire_order(serial);
        }
    }

    fn advance_deliveries(&mut self, delta: f32) {
        let mut ready = Vec::new();
        let mut index = 0;
        while index < self.deliveries.len() {
            self.deliveries[index].remaining_delay -= delta;
            if self.deliveries[index].remaining_delay <= 0.0 {
                ready.push(self.deliveries.remove(index));
            } else {
                index += 1;
            }
        }
        for delivery in ready {
            self.resolve_delivery(delivery);
        }
    }

    fn expire_order(&mut self, serial: u64) {
        let order = match self.orders.remove_by_serial(serial) {
            Some(order) => order,
            None => return,
        };
        self.deliveries.retain(|delivery| delivery.order_serial != serial);
        info!(
            "[ORDERS] Order {} ({}) expired",
            order.id(),
            order.recipe().name()
        );
        self.dispatcher.emit(OrderEvent::OrderExpired {
            recipe: order.recipe().clone(),
            order_id: order.id(),
        });
        if !self.finished {
            self.start_new_order(None);
        }
    }

    /// Saca una orden sin emitir eventos
    pub fn cancel_order(&mut self, id: OrderId) -> bool {
        match self.orders.remove_by_id(id) {
            Some(order) => {
                self.deliveries
                    .retain(|delivery| delivery.order_serial != order.serial());
                debug!("[ORDERS] Cancelled order {}", id);
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.orders.clear();
        self.deliveries.clear();
    }

    pub fn reset(&mut self) {
        self.clear_all();
        self.completed_orders = 0;
        self.score = 0;
        self.finished = false;
        debug!("[ORDERS] Reset");
    }

    pub fn active_orders(&self) -> Vec<ActiveOrder> {
        self.orders.snapshot()
    }

    pub fn active_order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn pending_deliveries(&self) -> &[PendingDelivery] {
        &self.deliveries
    }

    pub fn completed_order_count(&self) -> u32 {
        self.completed_orders
    }

    pub fn required_order_count(&self) -> Option<u32> {
        self.required_orders
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn max_concurrent_orders(&self) -> usize {
        self.max_concurrent
    }

    pub fn library(&self) -> &RecipeLibrary {
        &self.library
    }

    pub fn level(&self) -> &L {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut L {
        &mut self.level
    }
}
