//! flowlog-core: paso de logging estructurado para un motor de pipelines.
//!
//! Dado un request (message, label, severidad, flags) el paso escribe
//! líneas prefijadas en la consola del run, anota el nodo de ejecución con
//! un label legible y, según la severidad, marca el nodo como inestable o
//! fallido, propagando el fallo al run completo solo para FATAL.

pub mod constants;
pub mod context;
pub mod emitter;
pub mod errors;
pub mod request;
pub mod severity;

pub use context::{Annotation, AnnotationKind, ConsoleSink, ExecutionNode, InMemoryConsole,
                  InMemoryNode, InMemoryRun, InMemoryStepContext, NodeResult, RunHandle,
                  RunStatus, StepContext, WriterConsole};
pub use emitter::LogEmitter;
pub use errors::FlowLogError;
pub use request::{call_summary, LogRequest, LogRequestBuilder};
pub use severity::{Severity, Verdict};
