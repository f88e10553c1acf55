use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Airport transfer price table row. The embedded table in `data` uses the
/// same shape as the admin-editable `Routes` collection.
///
/// Matching against this table is by exact equality of the Thai display
/// strings for `from_location` and `to_location`; no normalization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferRoute {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub from_location: String,
    pub to_location: String,
    pub travel_time: String,
    pub sedan_price: u32,
    pub van_price: u32,
    #[serde(default)]
    pub sort_order: i32,
}

/// Price estimate for a known (airport, destination) pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteEstimate {
    pub sedan_price: u32,
    pub van_price: u32,
    pub travel_time: String,
}
