pub mod auth;
pub mod chat;
pub mod config;
pub mod schedule;
pub mod score;
