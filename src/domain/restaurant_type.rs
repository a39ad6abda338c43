use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// The enumerated selector used to choose which restaurant variant to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantType {
    /// Courier delivery service.
    Delivery,
    /// Counter-service fast food.
    FastFood,
    /// Formal dining.
    Formal,
}

impl RestaurantType {
    /// All selectors in declaration order.
    pub const ALL: [RestaurantType; 3] =
        [RestaurantType::Delivery, RestaurantType::FastFood, RestaurantType::Formal];

    /// Lookup name for this selector.
    pub fn name(&self) -> &'static str {
        match self {
            RestaurantType::Delivery => "delivery",
            RestaurantType::FastFood => "fast_food",
            RestaurantType::Formal => "formal",
        }
    }

    /// Parse a selector from its name.
    pub fn from_name(name: &str) -> Option<RestaurantType> {
        match name.to_lowercase().as_str() {
            "delivery" => Some(RestaurantType::Delivery),
            "fast_food" | "fast-food" => Some(RestaurantType::FastFood),
            "formal" => Some(RestaurantType::Formal),
            _ => None,
        }
    }

    /// Description of what this selector requests.
    pub fn description(&self) -> &'static str {
        match self {
            RestaurantType::Delivery => "Restaurant preparing orders for courier delivery.",
            RestaurantType::FastFood => "Counter-service restaurant with a fixed menu.",
            RestaurantType::Formal => "Table-service restaurant for formal dining.",
        }
    }
}

impl fmt::Display for RestaurantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RestaurantType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestaurantType::from_name(s).ok_or_else(|| AppError::unsupported(s))
    }
}
