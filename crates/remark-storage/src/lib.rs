//! remark-storage - Storage library for remark
//!
//! This crate provides repository implementations backed by a directory of
//! JSON dataset files.

mod json_store;

pub use json_store::{default_data_dir, Dataset, JsonFileStore};
