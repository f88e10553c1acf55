pub mod ai_service;
pub mod chat_session_service;
pub mod notification_service;
pub mod pricing_service;
pub mod recommendation_service;
