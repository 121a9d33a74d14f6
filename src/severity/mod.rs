//! Severidad y política de veredictos.
//!
//! Este módulo concentra la única decisión real del paso: qué nivel de
//! severidad produce qué efecto sobre el nodo y el run.

mod level;
mod policy;

pub use level::Severity;
pub use policy::Verdict;
