//! Frontera con el motor host.
//!
//! El host se modela como un conjunto de capacidades chicas (nodo, run,
//! consola) detrás de traits, no como clases a subclasear: el core queda
//! testeable con fakes in-memory y el host real provee sus propias
//! implementaciones.

mod annotation;
mod memory;
mod traits;

pub use annotation::{Annotation, AnnotationKind, NodeResult, RunStatus};
pub use memory::{InMemoryConsole, InMemoryNode, InMemoryRun, InMemoryStepContext, WriterConsole};
pub use traits::{ConsoleSink, ExecutionNode, RunHandle, StepContext};
