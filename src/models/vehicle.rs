use serde::{Deserialize, Serialize};

/// Catalog entry for a rentable vehicle. Reference data only, never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vehicle {
    pub slug: String,
    pub name: String,
    pub vehicle_type: String,
    pub description: String,
    pub seats: u32,
    pub bags: u32,
    pub price_per_day: u32,
    pub badge: String,
    pub badge_color: String,
}
