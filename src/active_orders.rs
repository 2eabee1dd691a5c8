//! Ordenes activas. El orden de insercion es la prioridad con la que reciben ingredientes.
use crate::{
    ingredient::Ingredient,
    order::{ActiveOrder, OrderId},
};

pub struct ActiveOrders {
    orders: Vec<ActiveOrder>,
}

impl ActiveOrders {
    pub fn new() -> ActiveOrders {
        ActiveOrders { orders: Vec::new() }
    }

    pub fn push(&mut self, order: ActiveOrder) {
        self.orders.push(order);
    }

    /// Siguiente id libre: el mayor id activo mas uno, o 1 si no hay ordenes
    pub fn next_id(&self) -> OrderId {
        let max = self.orders.iter().map(|order| order.id().0).max().unwrap_or(0);
        OrderId(max + 1)
    }

    pub fn remove_by_id(&mut self, id: OrderId) -> Option<ActiveOrder> {
        let position = self.orders.iter().position(|order| order.id() == id)?;
        Some(self.orders.remove(position))
    }

    pub fn remove_by_serial(&mut self, serial: u64) -> Option<ActiveOrder> {
        let position = self
            .orders
            .iter()
            .position(|order| order.serial() == serial)?;
        Some(self.orders.remove(position))
    }

    pub fn find_by_serial_mut(&mut self, serial: u64) -> Option<&mut ActiveOrder> {
        self.orders.iter_mut().find(|order| order.serial() == serial)
    }

    /// Primera orden (en orden de llegada) a la que le falta `ingredient`
    pub fn first_needing(&self, ingredient: Ingredient) -> Option<&ActiveOrder> {
        self.orders.iter().find(|order| order.needs(ingredient))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveOrder> {
        self.orders.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ActiveOrder> {
        self.orders.iter_mut()
    }

    pub fn snapshot(&self) -> Vec<ActiveOrder> {
        self.orders.clone()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl Default for ActiveOrders {
    fn default() -> Self {
        ActiveOrders::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use std::rc::Rc;

    fn toast() -> Rc<Recipe> {
        Rc::new(Recipe::new("Toast", vec![(Ingredient::Bread, 2)], 8, 100).unwrap())
    }

    fn order(id: u32, serial: u64) -> ActiveOrder {
        ActiveOrder::new(toast(), OrderId(id), serial, 30.0)
    }

    #[test]
    fn should_create_an_empty_collection() {
        let orders = ActiveOrders::new();
        assert_eq!(true, orders.is_empty());
        assert_eq!(OrderId(1), orders.next_id());
    }

    #[test]
    fn should_add_an_order() {
        let mut orders = ActiveOrders::new();
        orders.push(order(1, 1));
        assert_eq!(false, orders.is_empty());
        assert_eq!(1, orders.len());
    }

    #[test]
    fn should_use_the_highest_id_plus_one() {
        let mut orders = ActiveOrders::new();
        orders.push(order(1, 1));
        orders.push(order(4, 2));
        orders.push(order(2, 3));
        assert_eq!(OrderId(5), orders.next_id());
    }

    #[test]
    fn should_reuse_ids_after_removal() {
        let mut orders = ActiveOrders::new();
        orders.push(order(1, 1));
        orders.push(order(2, 2));
        assert_eq!(true, orders.remove_by_id(OrderId(2)).is_some());
        assert_eq!(OrderId(2), orders.next_id());
    }

    #[test]
    fn should_remove_and_return_none_when_missing() {
        let mut orders = ActiveOrders::new();
        assert_eq!(true, orders.remove_by_id(OrderId(1)).is_none());
        assert_eq!(true, orders.remove_by_serial(1).is_none());
    }

    #[test]
    fn should_pick_the_oldest_order_needing_an_ingredient() {
        let mut orders = ActiveOrders::new();
        orders.push(order(1, 1));
        orders.push(order(2, 2));
        assert_eq!(OrderId(1), orders.first_needing(Ingredient::Bread).unwrap().id());

        orders.find_by_serial_mut(1).unwrap().apply(Ingredient::Bread, 2);
        assert_eq!(OrderId(2), orders.first_needing(Ingredient::Bread).unwrap().id());
        assert_eq!(true, orders.first_needing(Ingredient::Egg).is_none());
    }

    #[test]
    fn should_return_an_independent_snapshot() {
        let mut orders = ActiveOrders::new();
        orders.push(order(1, 1));
        let mut snapshot = orders.snapshot();
        snapshot[0].apply(Ingredient::Bread, 2);
        snapshot.clear();
        assert_eq!(1, orders.len());
        assert_eq!(0, orders.iter().next().unwrap().collected_of(Ingredient::Bread));
    }
}
