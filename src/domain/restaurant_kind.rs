use std::fmt;

/// Type tag identifying a concrete restaurant variant.
///
/// Distinct from [`RestaurantType`](super::RestaurantType): three selectors
/// currently map onto two variants, because the formal selector resolves to
/// the fast-food variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantKind {
    Delivery,
    FastFood,
}

impl RestaurantKind {
    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RestaurantKind::Delivery => "Delivery",
            RestaurantKind::FastFood => "Fast Food",
        }
    }
}

impl fmt::Display for RestaurantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
