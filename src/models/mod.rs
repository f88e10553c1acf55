pub mod booking;
pub mod chat;
pub mod route;
pub mod settings;
pub mod vehicle;
