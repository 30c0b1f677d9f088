//! Mutable per-order bookkeeping owned by the shelf holding the order.

use crate::model::{Order, OrderStatus};

/// An [`Order`] plus the decay state that depends on where it is stored.
///
/// `value` is recomputed whenever `age` or `decay_modifier` changes, so it is
/// always consistent with the other two fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderState {
    order: Order,
    age: f64,
    decay_modifier: f64,
    value: f64,
}

impl OrderState {
    /// Fresh state at age 0.
    pub fn new(order: Order, decay_modifier: f64) -> Self {
        let mut state = Self {
            order,
            age: 0.0,
            decay_modifier,
            value: 0.0,
        };
        state.recompute();
        state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Seconds since arrival, clamped to the order's shelf life.
    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn decay_modifier(&self) -> f64 {
        self.decay_modifier
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_expired(&self) -> bool {
        self.value <= 0.0
    }

    /// Advances age by `delta` seconds. Negative deltas are ignored.
    pub(crate) fn age_by(&mut self, delta: f64) {
        if delta > 0.0 {
            self.age = (self.age + delta).min(f64::from(self.order.shelf_life));
            self.recompute();
        }
    }

    pub(crate) fn set_decay_modifier(&mut self, decay_modifier: f64) {
        self.decay_modifier = decay_modifier;
        self.recompute();
    }

    /// Owned copy for snapshots.
    pub fn status(&self) -> OrderStatus {
        OrderStatus {
            id: self.order.id,
            name: self.order.name.clone(),
            temperature: self.order.temperature,
            shelf_life: self.order.shelf_life,
            decay_rate: self.order.decay_rate,
            arrived_at_ms: self.order.arrived_at_ms,
            age: self.age,
            decay_modifier: self.decay_modifier,
            value: self.value,
        }
    }

    fn recompute(&mut self) {
        self.value = self.order.value_at(self.age, self.decay_modifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderId, Temperature};

    fn state(shelf_life: u32, decay_rate: f64, modifier: f64) -> OrderState {
        let params = OrderCreate {
            name: "Pad Thai".to_string(),
            temperature: Temperature::Hot,
            shelf_life,
            decay_rate,
        };
        OrderState::new(Order::new(OrderId(1), 0, params).unwrap(), modifier)
    }

    #[test]
    fn test_age_is_clamped_to_shelf_life() {
        let mut s = state(10, 0.0, 1.0);
        s.age_by(25.0);
        assert_eq!(s.age(), 10.0);
        assert!(s.is_expired());
    }

    #[test]
    fn test_value_is_non_increasing_with_age() {
        let mut s = state(300, 0.45, 1.0);
        let mut last = s.value();
        for _ in 0..400 {
            s.age_by(1.0);
            assert!(s.value() <= last);
            last = s.value();
        }
    }

    #[test]
    fn test_modifier_change_recomputes_value() {
        let mut s = state(300, 0.45, 1.0);
        s.age_by(100.0);
        let home_value = s.value();
        s.set_decay_modifier(2.0);
        assert!(s.value() < home_value);
        s.set_decay_modifier(1.0);
        assert_eq!(s.value(), home_value);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut s = state(300, 0.45, 1.0);
        s.age_by(-5.0);
        assert_eq!(s.age(), 0.0);
    }
}
