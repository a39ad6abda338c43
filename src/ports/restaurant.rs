use crate::domain::RestaurantKind;

/// The shared capability implemented by every constructible restaurant variant.
///
/// Variants are built with no arguments and share no state with one another;
/// ownership of each instance passes entirely to the caller. Business-level
/// behavior (menus, ordering, delivery) lives in the application layers that
/// consume this crate.
pub trait Restaurant: Send + Sync + std::fmt::Debug {
    /// Type tag identifying the concrete variant.
    fn kind(&self) -> RestaurantKind;

    /// Human-readable variant name.
    fn name(&self) -> &'static str;
}
