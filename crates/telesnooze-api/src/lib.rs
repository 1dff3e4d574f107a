pub mod alarms;
pub mod auth;
pub mod credentials;
pub mod error;
pub mod extract;
pub mod repository;
pub mod routes;
