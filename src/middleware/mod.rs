//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP compartido por ambos servicios.

pub mod cors;

pub use cors::*;
