//! Parlera - Language Practice Backend
//!
//! This crate implements the conversation session lifecycle and progress
//! aggregation engine behind the Parlera language-practice application.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
