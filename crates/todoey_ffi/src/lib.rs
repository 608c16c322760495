//! Flutter-facing bindings for Todoey core.

pub mod api;
