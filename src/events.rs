//! Eventos del ciclo de vida de las ordenes.
//!
//! Los suscriptores se llaman de forma sincronica, en el orden en que se
//! registraron. Un suscriptor que no esta registrado al momento de emitir
//! no recibe el evento: no hay cola ni repeticion.
use std::rc::Rc;

use crate::{ingredient::Ingredient, order::OrderId, recipe::Recipe};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    OrderStarted {
        order_id: OrderId,
        recipe: Rc<Recipe>,
    },
    IngredientCollected {
        ingredient: Ingredient,
        amount: u32,
    },
    OrderCompleted {
        recipe: Rc<Recipe>,
        order_id: OrderId,
    },
    OrderExpired {
        recipe: Rc<Recipe>,
        order_id: OrderId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    OrderStarted,
    IngredientCollected,
    OrderCompleted,
    OrderExpired,
}

impl OrderEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            OrderEvent::OrderStarted { .. } => EventKind::OrderStarted,
            OrderEvent::IngredientCollected { .. } => EventKind::IngredientCollected,
            OrderEvent::OrderCompleted { .. } => EventKind::OrderCompleted,
            OrderEvent::OrderExpired { .. } => EventKind::OrderExpired,
        }
    }
}

pub type OrderListener = Box<dyn FnMut(&OrderEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

pub struct EventDispatcher {
    subscribers: Vec<(SubscriberId, OrderListener)>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> EventDispatcher {
        EventDispatcher {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, listener: OrderListener) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscriber, _)| *subscriber != id);
        before != self.subscribers.len()
    }

    pub fn emit(&mut self, event: OrderEvent) {
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        EventDispatcher::new()
    }
}
