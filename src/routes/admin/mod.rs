pub mod auth;
pub mod bookings;
pub mod chats;
pub mod routes;
pub mod settings;
