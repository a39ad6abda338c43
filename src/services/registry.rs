use std::collections::HashMap;

use crate::domain::{AppError, RestaurantType};
use crate::ports::Restaurant;

use super::{DeliveryRestaurant, FastFoodRestaurant};

/// Zero-argument constructor for a restaurant variant.
pub type RestaurantConstructor = fn() -> Box<dyn Restaurant>;

/// Registry mapping selectors to variant constructors.
///
/// Each `construct` call runs the registered constructor and hands the fresh
/// instance to the caller; nothing is cached or shared between calls.
pub struct RestaurantRegistry {
    constructors: HashMap<RestaurantType, RestaurantConstructor>,
}

impl RestaurantRegistry {
    /// Empty registry with no constructors installed.
    pub fn new() -> Self {
        RestaurantRegistry { constructors: HashMap::new() }
    }

    /// Registry pre-populated with the stock mapping.
    ///
    /// `Formal` resolves to the fast-food variant. That mirrors the shipped
    /// mapping; giving formal dining its own variant is a product decision
    /// that has not been made yet.
    pub fn with_defaults() -> Self {
        let mut registry = RestaurantRegistry::new();
        registry.register(RestaurantType::Delivery, || Box::new(DeliveryRestaurant::new()));
        registry.register(RestaurantType::FastFood, || Box::new(FastFoodRestaurant::new()));
        registry.register(RestaurantType::Formal, || Box::new(FastFoodRestaurant::new()));
        registry
    }

    /// Register or replace the constructor for a selector.
    pub fn register(&mut self, selector: RestaurantType, constructor: RestaurantConstructor) {
        self.constructors.insert(selector, constructor);
    }

    /// Whether a constructor is installed for this selector.
    pub fn is_registered(&self, selector: RestaurantType) -> bool {
        self.constructors.contains_key(&selector)
    }

    /// Number of registered selectors.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Construct a fresh restaurant instance for the selector.
    ///
    /// Fails with [`AppError::UnsupportedType`] when no constructor is
    /// registered; nothing is allocated in that case.
    pub fn construct(&self, selector: RestaurantType) -> Result<Box<dyn Restaurant>, AppError> {
        let constructor = self
            .constructors
            .get(&selector)
            .ok_or_else(|| AppError::unsupported(selector.name()))?;
        Ok(constructor())
    }
}

impl Default for RestaurantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RestaurantKind;

    #[test]
    fn defaults_cover_every_selector() {
        let registry = RestaurantRegistry::with_defaults();
        for selector in RestaurantType::ALL {
            assert!(registry.is_registered(selector), "no constructor for '{selector}'");
        }
        assert_eq!(registry.len(), RestaurantType::ALL.len());
    }

    #[test]
    fn delivery_selector_builds_delivery_variant() {
        let registry = RestaurantRegistry::with_defaults();
        let restaurant = registry.construct(RestaurantType::Delivery).unwrap();
        assert_eq!(restaurant.kind(), RestaurantKind::Delivery);
    }

    #[test]
    fn formal_selector_aliases_fast_food_variant() {
        let registry = RestaurantRegistry::with_defaults();
        let restaurant = registry.construct(RestaurantType::Formal).unwrap();
        assert_eq!(restaurant.kind(), RestaurantKind::FastFood);
    }

    #[test]
    fn empty_registry_rejects_every_selector() {
        let registry = RestaurantRegistry::new();
        for selector in RestaurantType::ALL {
            let err = registry.construct(selector).unwrap_err();
            assert!(err.to_string().contains(selector.name()));
        }
    }

    #[test]
    fn register_replaces_an_existing_constructor() {
        let mut registry = RestaurantRegistry::with_defaults();
        registry.register(RestaurantType::Formal, || Box::new(DeliveryRestaurant::new()));
        let restaurant = registry.construct(RestaurantType::Formal).unwrap();
        assert_eq!(restaurant.kind(), RestaurantKind::Delivery);
        assert_eq!(registry.len(), RestaurantType::ALL.len());
    }
}
