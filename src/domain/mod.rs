pub mod error;
pub mod restaurant_kind;
pub mod restaurant_type;

pub use error::AppError;
pub use restaurant_kind::RestaurantKind;
pub use restaurant_type::RestaurantType;
