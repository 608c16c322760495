//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw user input into validated records.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod category_service;
pub mod item_service;
