use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// One customer/assistant exchange, written once per chat turn.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub session_id: String,
    pub channel: String,
    pub customer_message: String,
    pub ai_response: String,
    pub language: String,
    pub page_url: String,
    pub created_at: DateTime,
}
