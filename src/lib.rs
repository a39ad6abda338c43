//! foodhub: construction registry for restaurant variants.
//!
//! Maps an enumerated [`RestaurantType`] selector to a freshly constructed
//! variant implementing the [`Restaurant`] capability. Construction is the
//! whole job: business behavior belongs to the application layers that call
//! this crate.

pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{AppError, RestaurantKind, RestaurantType};
pub use ports::Restaurant;
pub use services::{
    DeliveryRestaurant, FastFoodRestaurant, RestaurantConstructor, RestaurantRegistry,
};

/// Construct a restaurant for `selector` using the stock mapping.
///
/// Builds a [`RestaurantRegistry::with_defaults`] registry and dispatches
/// through it. Callers needing a custom mapping should hold their own
/// registry instead.
pub fn construct(selector: RestaurantType) -> Result<Box<dyn Restaurant>, AppError> {
    RestaurantRegistry::with_defaults().construct(selector)
}
