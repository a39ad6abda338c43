use crate::domain::RestaurantKind;
use crate::ports::Restaurant;

/// Restaurant variant preparing orders for courier delivery.
#[derive(Debug, Default)]
pub struct DeliveryRestaurant;

impl DeliveryRestaurant {
    pub fn new() -> Self {
        DeliveryRestaurant
    }
}

impl Restaurant for DeliveryRestaurant {
    fn kind(&self) -> RestaurantKind {
        RestaurantKind::Delivery
    }

    fn name(&self) -> &'static str {
        "Delivery"
    }
}
