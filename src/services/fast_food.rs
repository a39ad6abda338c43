use crate::domain::RestaurantKind;
use crate::ports::Restaurant;

/// Counter-service restaurant variant.
#[derive(Debug, Default)]
pub struct FastFoodRestaurant;

impl FastFoodRestaurant {
    pub fn new() -> Self {
        FastFoodRestaurant
    }
}

impl Restaurant for FastFoodRestaurant {
    fn kind(&self) -> RestaurantKind {
        RestaurantKind::FastFood
    }

    fn name(&self) -> &'static str {
        "Fast Food"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_food_reports_its_kind() {
        assert_eq!(FastFoodRestaurant::new().kind(), RestaurantKind::FastFood);
    }
}
