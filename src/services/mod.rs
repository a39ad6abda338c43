mod delivery;
mod fast_food;
mod registry;

pub use delivery::DeliveryRestaurant;
pub use fast_food::FastFoodRestaurant;
pub use registry::{RestaurantConstructor, RestaurantRegistry};
