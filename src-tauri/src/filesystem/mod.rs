// src-tauri/src/filesystem/mod.rs
//!
//! Filesystem Module
//!
//! Local file browsing, editing and import for the front end.

pub mod commands;
pub mod dialog;
pub mod error;
pub mod operations;
pub mod types;
