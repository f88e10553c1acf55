use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Key-value site setting row, managed from the admin settings screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteSetting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub key: String,
    pub value: String,
}

/// Settings keys exposed without authentication.
pub const SOCIAL_SETTINGS_KEYS: [&str; 6] = [
    "line_url",
    "facebook_url",
    "instagram_url",
    "tiktok_url",
    "whatsapp_url",
    "phone",
];

/// Analytics tag ids the frontend injects into its tracking scripts.
pub const TRACKING_SETTINGS_KEYS: [&str; 4] = [
    "ga4_measurement_id",
    "gtm_container_id",
    "facebook_pixel_id",
    "line_tag_id",
];
