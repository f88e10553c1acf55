use std::collections::HashMap;

use chrono::{FixedOffset, NaiveDate};
use mongodb::bson::DateTime;
use serde::Serialize;

use crate::models::chat::ChatLog;

/// Derived view over the chat log window: all messages sharing a session id,
/// with summary fields for the admin conversation list. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub session_id: String,
    pub channel: String,
    pub language: String,
    pub page_url: String,
    pub first_message: String,
    pub first_message_at: DateTime,
    pub last_message_at: DateTime,
    pub message_count: usize,
    pub messages: Vec<ChatLog>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatStats {
    pub total_today: usize,
    pub total_all: usize,
    pub by_channel: HashMap<String, usize>,
}

// Thailand has no daylight saving, so a fixed offset is enough.
const BANGKOK_UTC_OFFSET_SECS: i32 = 7 * 3600;

fn bangkok_date(ts: DateTime) -> NaiveDate {
    let offset = FixedOffset::east_opt(BANGKOK_UTC_OFFSET_SECS).unwrap();
    chrono::DateTime::from_timestamp_millis(ts.timestamp_millis())
        .unwrap_or_default()
        .with_timezone(&offset)
        .date_naive()
}

pub struct ChatSessionService;

impl ChatSessionService {
    /// Group a window of chat log rows into conversations.
    ///
    /// Summary fields are true min/max over the rows seen, whatever order
    /// they arrive in: whenever a row earlier than the recorded first message
    /// shows up, the session's channel/language/page_url/first_message move
    /// to that row. Output sessions are sorted newest-activity-first and each
    /// session's messages oldest-first.
    ///
    /// The grouper only sees the window the caller fetched. A session whose
    /// earlier rows fall outside a capped window shows a late first message
    /// and an undercount; that is a property of the bounded query, not of
    /// the grouping.
    pub fn group_sessions(logs: &[ChatLog]) -> Vec<ChatSession> {
        let mut by_session: HashMap<String, ChatSession> = HashMap::new();

        for log in logs {
            let session = by_session
                .entry(log.session_id.clone())
                .or_insert_with(|| ChatSession {
                    session_id: log.session_id.clone(),
                    channel: log.channel.clone(),
                    language: log.language.clone(),
                    page_url: log.page_url.clone(),
                    first_message: log.customer_message.clone(),
                    first_message_at: log.created_at,
                    last_message_at: log.created_at,
                    message_count: 0,
                    messages: Vec::new(),
                });

            session.message_count += 1;
            session.messages.push(log.clone());

            if log.created_at < session.first_message_at {
                session.first_message_at = log.created_at;
                session.first_message = log.customer_message.clone();
                session.channel = log.channel.clone();
                session.language = log.language.clone();
                session.page_url = log.page_url.clone();
            }
            if log.created_at > session.last_message_at {
                session.last_message_at = log.created_at;
            }
        }

        let mut sessions: Vec<ChatSession> = by_session.into_values().collect();
        for session in &mut sessions {
            session.messages.sort_by_key(|m| m.created_at);
        }
        sessions.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        sessions
    }

    /// Aggregate counters for the admin chat dashboard. `total_today` counts
    /// distinct sessions with at least one row on `now`'s Bangkok calendar
    /// day; `by_channel` counts raw messages, not sessions.
    pub fn session_stats(
        logs: &[ChatLog],
        sessions: &[ChatSession],
        now: DateTime,
    ) -> ChatStats {
        let today = bangkok_date(now);

        let mut today_sessions: Vec<&str> = logs
            .iter()
            .filter(|log| bangkok_date(log.created_at) == today)
            .map(|log| log.session_id.as_str())
            .collect();
        today_sessions.sort_unstable();
        today_sessions.dedup();

        let mut by_channel: HashMap<String, usize> = HashMap::new();
        for log in logs {
            *by_channel.entry(log.channel.clone()).or_insert(0) += 1;
        }

        ChatStats {
            total_today: today_sessions.len(),
            total_all: sessions.len(),
            by_channel,
        }
    }
}
