use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::DateTime;
use mongodb::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::chat::ChatLog;
use crate::services::ai_service::{AiService, ChatTurn};
use crate::services::notification_service::{ChatNotification, NotificationService};

const MAX_MESSAGE_CHARS: usize = 500;
const MAX_HISTORY_LEN: usize = 50;

const REPLY_INVALID: &str = "ข้อความไม่ถูกต้อง";
const REPLY_TOO_LONG: &str = "ข้อความยาวเกินไป กรุณาพิมพ์ไม่เกิน 500 ตัวอักษร";
const REPLY_HISTORY_FULL: &str =
    "บทสนทนายาวเกินไปค่ะ กรุณาติดต่อทีมงานผ่าน LINE @ssrcvip ค่ะ 🙏";
const REPLY_FALLBACK: &str = "ขออภัยค่ะ ระบบขัดข้อง กรุณาติดต่อผ่าน LINE @ssrcvip ค่ะ 🙏";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
    pub session_id: Option<String>,
    pub page_url: Option<String>,
}

/// Best-effort script detection on the customer's text; stored with the log
/// row and shown in the admin viewer.
fn detect_language(text: &str) -> &'static str {
    for c in text.chars() {
        match c {
            '\u{0E00}'..='\u{0E7F}' => return "th",
            '\u{4E00}'..='\u{9FFF}' => return "zh",
            '\u{3040}'..='\u{30FF}' => return "ja",
            '\u{AC00}'..='\u{D7AF}' => return "ko",
            _ => {}
        }
    }
    "en"
}

/// Chat widget endpoint. Validation failures and upstream AI errors all
/// resolve to a friendly Thai reply; the widget never sees a raw error.
pub async fn chat(db: web::Data<Arc<Client>>, input: web::Json<ChatRequest>) -> impl Responder {
    let client = db.into_inner();
    let input = input.into_inner();

    let Some(last_message) = input.messages.last() else {
        return HttpResponse::BadRequest().json(json!({ "response": REPLY_INVALID }));
    };
    if last_message.content.is_empty() || last_message.content.chars().count() > MAX_MESSAGE_CHARS
    {
        return HttpResponse::BadRequest().json(json!({ "response": REPLY_TOO_LONG }));
    }
    if input.messages.len() > MAX_HISTORY_LEN {
        return HttpResponse::Ok().json(json!({ "response": REPLY_HISTORY_FULL }));
    }

    let customer_message = last_message.content.clone();
    let history = &input.messages[..input.messages.len() - 1];

    let response_text = match AiService::new() {
        Ok(service) => match service.generate_response(&customer_message, history).await {
            Ok(text) => text,
            Err(err) => {
                eprintln!("AI completion error: {}", err);
                REPLY_FALLBACK.to_string()
            }
        },
        Err(err) => {
            eprintln!("AI service unavailable: {}", err);
            REPLY_FALLBACK.to_string()
        }
    };

    let session_id = input.session_id.unwrap_or_else(|| "unknown".to_string());
    let page_url = input.page_url.unwrap_or_else(|| "/".to_string());
    let language = detect_language(&customer_message);

    // Fire-and-forget: chat-ops alert and the log row the admin viewer reads.
    tokio::spawn(NotificationService::send_chat_notification(
        ChatNotification {
            customer_message: customer_message.clone(),
            ai_response: response_text.clone(),
            page_url: page_url.clone(),
            language: language.to_string(),
        },
    ));

    let log = ChatLog {
        id: None,
        session_id,
        channel: "web".to_string(),
        customer_message,
        ai_response: response_text.clone(),
        language: language.to_string(),
        page_url,
        created_at: DateTime::now(),
    };
    tokio::spawn(async move {
        let collection: mongodb::Collection<ChatLog> =
            client.database(DB_NAME).collection("ChatLogs");
        if let Err(err) = collection.insert_one(&log).await {
            eprintln!("Chat log insert error: {:?}", err);
        }
    });

    HttpResponse::Ok().json(json!({ "response": response_text }))
}
