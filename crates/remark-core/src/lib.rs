//! remark-core - Core library for remark
//!
//! This crate provides the comment query and presentation logic for a forum,
//! including repository abstractions, comment enrichment, mention linking,
//! Markdown rendering and avatar URL synthesis.

pub mod error;
pub mod types;
pub mod config;
pub mod repository;
pub mod mention;
pub mod markdown;
pub mod comment;
pub mod query;

pub use error::{RemarkError, Result};
pub use types::*;
