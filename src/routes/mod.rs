pub mod admin;
pub mod booking;
pub mod chat;
pub mod fleet;
pub mod health;
pub mod settings;
