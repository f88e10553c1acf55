use chrono::{FixedOffset, Utc};
use serde_json::json;
use std::env;

/// Chat-ops alerts to the operator's Telegram group. Fire-and-forget: callers
/// spawn these and only log failures. Disabled entirely when the bot token or
/// chat id is not configured.
pub struct NotificationService;

pub struct ChatNotification {
    pub customer_message: String,
    pub ai_response: String,
    pub page_url: String,
    pub language: String,
}

pub struct BookingNotification {
    pub reference_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub travel_date: String,
    pub travel_time: String,
    pub vehicle_name: String,
    pub estimated_price: u32,
}

fn bangkok_now() -> String {
    let offset = FixedOffset::east_opt(7 * 3600).unwrap();
    Utc::now()
        .with_timezone(&offset)
        .format("%d %b %Y %H:%M")
        .to_string()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn truncated(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

impl NotificationService {
    fn credentials() -> Option<(String, String)> {
        let token = env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok()?;
        Some((token, chat_id))
    }

    async fn send_message(text: String) {
        let Some((token, chat_id)) = Self::credentials() else {
            return;
        };

        let url = format!("https://api.telegram.org/bot{}/sendMessage", token);
        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "HTML",
        });

        let result = reqwest::Client::new().post(&url).json(&body).send().await;
        if let Err(err) = result {
            eprintln!("Telegram notification error: {:?}", err);
        }
    }

    pub async fn send_chat_notification(notification: ChatNotification) {
        let text = [
            "🌐 <b>Web แชทใหม่</b>".to_string(),
            format!("⏰ {}", bangkok_now()),
            String::new(),
            "👤 <b>ลูกค้า:</b>".to_string(),
            escape_html(&notification.customer_message),
            String::new(),
            "🤖 <b>น้องแซน:</b>".to_string(),
            escape_html(&truncated(&notification.ai_response, 500)),
            String::new(),
            format!(
                "🌐 ภาษา: {} | 📱 {}",
                notification.language, notification.page_url
            ),
        ]
        .join("\n");

        Self::send_message(text).await;
    }

    pub async fn send_booking_notification(notification: BookingNotification) {
        let text = [
            format!(
                "📋 <b>Booking ใหม่!</b> #{}",
                escape_html(&notification.reference_number)
            ),
            format!("⏰ {}", bangkok_now()),
            format!(
                "👤 {} | 📞 {}",
                escape_html(&notification.customer_name),
                escape_html(&notification.customer_phone)
            ),
            format!(
                "🚐 {}: {} → {}",
                escape_html(&notification.service_type),
                escape_html(&notification.pickup_location),
                escape_html(&notification.dropoff_location)
            ),
            format!(
                "📅 {} {}",
                escape_html(&notification.travel_date),
                escape_html(&notification.travel_time)
            ),
            format!(
                "🚗 {} | 💰 ฿{}",
                escape_html(&notification.vehicle_name),
                notification.estimated_price
            ),
        ]
        .join("\n");

        Self::send_message(text).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>a & b</b>"),
            "&lt;b&gt;a &amp; b&lt;/b&gt;"
        );
    }

    #[test]
    fn test_truncated_counts_chars_not_bytes() {
        let thai = "สวัสดีค่ะ";
        assert_eq!(truncated(thai, 3), "สวั");
        assert_eq!(truncated("abc", 10), "abc");
    }
}
