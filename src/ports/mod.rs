//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence ports
//!
//! - `ConversationRepository` - write side of the session lifecycle,
//!   including the atomic complete-and-fold operation
//! - `ConversationReader` - read-optimized conversation views
//! - `ProgressReader` - per-language progress and practice statistics
//! - `CatalogReader` - language / scenario reference data
//! - `UserRepository` - account records
//!
//! ## Identity ports
//!
//! - `SessionValidator` - credential verification for the HTTP middleware
//! - `TokenIssuer` - credential issuance for register/login
//! - `PasswordHasher` - one-way password hashing

mod auth;
mod catalog_reader;
mod conversation_reader;
mod conversation_repository;
mod progress_reader;
mod user_repository;

pub use auth::{PasswordHasher, SessionValidator, TokenIssuer};
pub use catalog_reader::CatalogReader;
pub use conversation_reader::{ConversationDetail, ConversationReader, ConversationView};
pub use conversation_repository::ConversationRepository;
pub use progress_reader::{ProgressReader, ProgressView};
pub use user_repository::UserRepository;
