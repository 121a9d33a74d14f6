use uuid::Uuid;

use crate::errors::FlowLogError;

use super::{Annotation, AnnotationKind, RunStatus};

/// Nodo anotable del grafo de ejecución del pipeline.
///
/// El host debe serializar las mutaciones sobre un mismo nodo:
/// `replace_annotation` no es seguro frente a llamadas concurrentes sobre el
/// mismo nodo sin sincronización externa.
pub trait ExecutionNode {
    /// Identificador opaco del nodo, usable para ubicar este punto del
    /// grafo más tarde.
    fn id(&self) -> Uuid;

    /// Reemplaza-o-agrega por kind: si ya existe una anotación del mismo
    /// kind se sobreescribe su contenido; kinds distintos no se tocan.
    fn replace_annotation(&mut self, annotation: Annotation);

    /// Anotación vigente de un kind, si existe.
    fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation>;
}

/// Estado terminal del run que contiene al nodo.
pub trait RunHandle {
    fn status(&self) -> RunStatus;
    fn set_status(&mut self, status: RunStatus);
}

/// Sink de consola append-only. Las escrituras son best-effort y no fallan:
/// un fallo del sink a mitad de escritura es fatal del entorno, no de este
/// componente.
pub trait ConsoleSink {
    fn println(&mut self, line: &str);
}

/// Contexto que el host expone a un paso en ejecución.
///
/// Cada getter falla si el colaborador no está ligado al contexto actual.
/// Esos fallos abortan la llamada completa, sin retry ni éxito parcial.
pub trait StepContext {
    fn execution_node(&mut self) -> Result<&mut dyn ExecutionNode, FlowLogError>;
    fn run(&mut self) -> Result<&mut dyn RunHandle, FlowLogError>;
    fn console(&mut self) -> Result<&mut dyn ConsoleSink, FlowLogError>;
}
