//! Temperature classes and the shelf tags derived from them.

use crate::model::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Storage temperature an order must be kept at.
///
/// Determines the order's *home* shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Cold,
    Frozen,
}

impl Temperature {
    /// Every temperature class, in display order.
    pub const ALL: [Temperature; 3] = [Temperature::Hot, Temperature::Cold, Temperature::Frozen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Cold => "cold",
            Temperature::Frozen => "frozen",
        }
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Temperature {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Temperature::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| OrderError::UnknownTemperature(s.to_string()))
    }
}

/// Tag identifying a shelf: one home shelf per [`Temperature`] plus the shared overflow shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelfKind {
    Home(Temperature),
    Overflow,
}

impl From<Temperature> for ShelfKind {
    fn from(temperature: Temperature) -> Self {
        ShelfKind::Home(temperature)
    }
}

impl Display for ShelfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShelfKind::Home(temperature) => write!(f, "{}", temperature),
            ShelfKind::Overflow => f.write_str("overflow"),
        }
    }
}
