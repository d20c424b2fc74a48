//! Core types and shared functionality for gather.
//!
//! This crate provides:
//! - Filesystem-backed cache for search responses and page text
//! - Unified error types
//! - Layered configuration

pub mod cache;
pub mod config;
pub mod error;

pub use cache::DiskCache;
pub use config::AppConfig;
pub use error::Error;
