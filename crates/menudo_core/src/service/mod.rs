//! Core use-case services.
//!
//! # Responsibility
//! - Compose store and controller into the board the UI layer drives.
//! - Keep FFI/CLI callers decoupled from controller wiring.

pub mod board_service;
