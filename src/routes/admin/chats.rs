use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime};
use mongodb::{options::FindOptions, Client};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::chat::ChatLog;
use crate::services::chat_session_service::ChatSessionService;

const DEFAULT_WINDOW: i64 = 100;
const MAX_WINDOW: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub channel: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

/// Conversation viewer feed: the most recent log rows grouped into sessions,
/// plus the dashboard counters. The grouping runs over the fetched window
/// only, so very old rows of a still-active session may fall outside it.
pub async fn list_chat_sessions(
    db: web::Data<Arc<Client>>,
    params: web::Query<ListParams>,
) -> impl Responder {
    let client = db.into_inner();
    let collection: mongodb::Collection<ChatLog> =
        client.database(DB_NAME).collection("ChatLogs");

    let mut filter = doc! {};
    if let Some(channel) = &params.channel {
        if !channel.is_empty() && channel != "all" {
            filter.insert("channel", channel);
        }
    }
    if let Some(search) = &params.search {
        if !search.is_empty() {
            let pattern = regex::escape(search);
            filter.insert(
                "$or",
                vec![
                    doc! { "customer_message": { "$regex": &pattern, "$options": "i" } },
                    doc! { "ai_response": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_WINDOW)
        .clamp(1, MAX_WINDOW);
    let options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .limit(limit)
        .build();

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<ChatLog>>().await {
            Ok(logs) => {
                let sessions = ChatSessionService::group_sessions(&logs);
                let stats = ChatSessionService::session_stats(&logs, &sessions, DateTime::now());
                HttpResponse::Ok().json(json!({
                    "sessions": sessions,
                    "stats": stats,
                }))
            }
            Err(err) => {
                eprintln!("Failed to collect chat logs: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect chat logs")
            }
        },
        Err(err) => {
            eprintln!("Failed to find chat logs: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find chat logs")
        }
    }
}
