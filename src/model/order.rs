//! Represents a single kitchen order waiting on a shelf.
//!
//! An `Order` is immutable once created. Everything that changes while the order
//! sits on a shelf (its age, the decay modifier of the shelf holding it, its value)
//! lives in [`OrderState`](crate::shelf::OrderState), which is owned by that shelf.

use crate::model::{OrderError, Temperature};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub temperature: Temperature,
    /// Seconds of nominal life at decay modifier 1.
    pub shelf_life: u32,
    /// Per-second decay coefficient.
    pub decay_rate: f64,
    /// Milliseconds since the simulation started.
    pub arrived_at_ms: u64,
}

/// Payload for creating a new order.
///
/// The serde field names match the order catalog's JSON records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub name: String,
    #[serde(rename = "temp")]
    pub temperature: Temperature,
    #[serde(rename = "shelfLife")]
    pub shelf_life: u32,
    #[serde(rename = "decayRate")]
    pub decay_rate: f64,
}

impl OrderCreate {
    /// Checks the decay parameters without building an order.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.shelf_life == 0 {
            return Err(OrderError::InvalidShelfLife(self.shelf_life));
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(OrderError::InvalidDecayRate(self.decay_rate));
        }
        Ok(())
    }
}

impl Order {
    /// Creates a new Order from creation parameters.
    ///
    /// # Errors
    /// Fails if `shelf_life` is zero or `decay_rate` is negative or not finite.
    pub fn new(id: OrderId, arrived_at_ms: u64, params: OrderCreate) -> Result<Self, OrderError> {
        params.validate()?;
        Ok(Self {
            id,
            name: params.name,
            temperature: params.temperature,
            shelf_life: params.shelf_life,
            decay_rate: params.decay_rate,
            arrived_at_ms,
        })
    }

    /// Normalized value of this order after `age` seconds under `decay_modifier`.
    ///
    /// `(shelfLife - age - decayRate * decayModifier * age) / shelfLife`
    ///
    /// Non-increasing in `age` for a fixed modifier; `<= 0` means expired.
    pub fn value_at(&self, age: f64, decay_modifier: f64) -> f64 {
        let shelf_life = f64::from(self.shelf_life);
        (shelf_life - age - self.decay_rate * decay_modifier * age) / shelf_life
    }

    /// Sort key used for every oldest/newest decision: arrival time, then id.
    pub fn arrival_key(&self) -> (u64, OrderId) {
        (self.arrived_at_ms, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_order(shelf_life: u32, decay_rate: f64) -> Order {
        let params = OrderCreate {
            name: "Banana Split".to_string(),
            temperature: Temperature::Hot,
            shelf_life,
            decay_rate,
        };
        Order::new(OrderId(1), 0, params).unwrap()
    }

    #[test]
    fn test_value_follows_decay_formula() {
        let order = hot_order(300, 0.45);
        assert_eq!(order.value_at(0.0, 1.0), 1.0);

        let at_200 = order.value_at(200.0, 1.0);
        assert!((at_200 - (300.0 - 1.45 * 200.0) / 300.0).abs() < 1e-12);
        assert!(at_200 > 0.0);

        assert!(order.value_at(206.0, 1.0) > 0.0);
        assert!(order.value_at(207.0, 1.0) <= 0.0);
    }

    #[test]
    fn test_higher_modifier_decays_faster() {
        let order = hot_order(300, 0.45);
        assert!(order.value_at(100.0, 2.0) < order.value_at(100.0, 1.0));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let params = OrderCreate {
            name: "Ghost Pepper".to_string(),
            temperature: Temperature::Hot,
            shelf_life: 0,
            decay_rate: 0.1,
        };
        assert_eq!(
            Order::new(OrderId(7), 0, params.clone()),
            Err(OrderError::InvalidShelfLife(0))
        );

        let params = OrderCreate { shelf_life: 10, decay_rate: -0.5, ..params };
        assert!(matches!(
            Order::new(OrderId(7), 0, params),
            Err(OrderError::InvalidDecayRate(_))
        ));
    }

    #[test]
    fn test_catalog_record_deserializes() {
        let json = r#"{"name": "Cheese Pizza", "temp": "hot", "shelfLife": 300, "decayRate": 0.45}"#;
        let params: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(params.temperature, Temperature::Hot);
        assert_eq!(params.shelf_life, 300);
    }
}
