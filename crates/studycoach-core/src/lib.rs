//! # StudyCoach Core Library
//!
//! This library provides the core business logic for the StudyCoach study
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **State Store**: a single persisted state blob (calendar activities,
//!   attachments, exam date, target score) with per-key coercion rules
//! - **Insights**: pure heuristics deriving a lock-in urgency score and a
//!   predicted exam score from the stored data
//! - **Chat Proxy Client**: HTTP client for the study-coach chat proxy
//! - **Storage**: TOML-based configuration and the durable state slot
//!
//! ## Key Components
//!
//! - [`StateStore`]: coerced, slot-backed application state
//! - [`ChatClient`]: text and image chat against the proxy service
//! - [`Config`]: application configuration management
//! - [`compute_lock_in`] / [`predict_score`]: scheduling heuristics

pub mod auth;
pub mod chat;
pub mod error;
pub mod insights;
pub mod state;
pub mod storage;

pub use chat::{ChatClient, ChatMessage, Role};
pub use error::{AuthError, ConfigError, CoreError, ServiceError, StorageError};
pub use insights::{compute_lock_in, parse_score, predict_score, predict_score_raw};
pub use state::{Attachment, Coerced, StateStore};
pub use storage::Config;
