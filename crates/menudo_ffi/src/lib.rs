//! Flutter-facing bindings for the MenuDo board core.

pub mod api;
