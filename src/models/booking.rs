use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub reference_number: String,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub airport: String,
    pub direction: String,
    pub travel_date: String,
    pub travel_time: String,
    pub num_days: u32,
    pub passengers: u32,
    pub luggage: u32,
    pub vehicle_slug: String,
    pub vehicle_name: String,
    pub estimated_price: u32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub country_code: String,
    pub preferred_contact: String,
    pub line_id: String,
    pub flight_number: String,
    pub hotel_name: String,
    pub special_notes: String,
    pub status: String,
    pub payment_status: String,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

/// Booking submission payload from the website's booking wizard. Everything
/// the customer typed; reference number, prices and timestamps are assigned
/// server-side.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookingInput {
    pub service_type: String,
    #[serde(default)]
    pub airport: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub custom_destination: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    #[serde(default = "default_num_days")]
    pub num_days: u32,
    pub travel_date: String,
    pub travel_time: String,
    pub passengers: u32,
    #[serde(default)]
    pub luggage: u32,
    #[serde(default)]
    pub vehicle_slug: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub preferred_contact: String,
    #[serde(default)]
    pub line_id: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub special_notes: String,
}

fn default_num_days() -> u32 {
    1
}
