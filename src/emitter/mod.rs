//! Orquestación de una llamada de logging.

mod core;

pub use core::LogEmitter;
