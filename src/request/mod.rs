//! Construcción de requests y resumen de llamada.

mod builder;
mod summary;

pub use builder::{LogRequest, LogRequestBuilder};
pub use summary::call_summary;
