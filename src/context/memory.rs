use std::io::Write;

use uuid::Uuid;

use crate::errors::FlowLogError;

use super::{Annotation, AnnotationKind, ConsoleSink, ExecutionNode, RunHandle, RunStatus, StepContext};

/// Nodo in-memory para tests y hosts embebidos.
pub struct InMemoryNode {
    id: Uuid,
    annotations: Vec<Annotation>,
}

impl InMemoryNode {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), annotations: Vec::new() }
    }

    /// Todas las anotaciones vigentes (a lo sumo una por kind).
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Default for InMemoryNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionNode for InMemoryNode {
    fn id(&self) -> Uuid {
        self.id
    }

    fn replace_annotation(&mut self, annotation: Annotation) {
        if let Some(existing) = self.annotations.iter_mut().find(|a| a.kind == annotation.kind) {
            *existing = annotation;
        } else {
            self.annotations.push(annotation);
        }
    }

    fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }
}

/// Run in-memory; arranca en `Success`.
pub struct InMemoryRun {
    status: RunStatus,
}

impl InMemoryRun {
    pub fn new() -> Self {
        Self { status: RunStatus::Success }
    }
}

impl Default for InMemoryRun {
    fn default() -> Self {
        Self::new()
    }
}

impl RunHandle for InMemoryRun {
    fn status(&self) -> RunStatus {
        self.status
    }

    fn set_status(&mut self, status: RunStatus) {
        self.status = status;
    }
}

/// Consola in-memory: acumula líneas en orden de escritura.
#[derive(Default)]
pub struct InMemoryConsole {
    pub lines: Vec<String>,
}

impl ConsoleSink for InMemoryConsole {
    fn println(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Adapter de consola sobre cualquier `io::Write`. Los errores de escritura
/// se descartan (sink best-effort).
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ConsoleSink for WriterConsole<W> {
    fn println(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{}", line);
    }
}

/// Contexto in-memory completo. Los constructores `without_*` simulan
/// colaboradores ausentes para ejercitar los caminos fatales.
pub struct InMemoryStepContext {
    pub node: InMemoryNode,
    pub run: InMemoryRun,
    pub console: InMemoryConsole,
    node_bound: bool,
    run_bound: bool,
    console_bound: bool,
}

impl InMemoryStepContext {
    pub fn new() -> Self {
        Self { node: InMemoryNode::new(),
               run: InMemoryRun::new(),
               console: InMemoryConsole::default(),
               node_bound: true,
               run_bound: true,
               console_bound: true }
    }

    pub fn without_node(mut self) -> Self {
        self.node_bound = false;
        self
    }

    pub fn without_run(mut self) -> Self {
        self.run_bound = false;
        self
    }

    pub fn without_console(mut self) -> Self {
        self.console_bound = false;
        self
    }
}

impl Default for InMemoryStepContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StepContext for InMemoryStepContext {
    fn execution_node(&mut self) -> Result<&mut dyn ExecutionNode, FlowLogError> {
        if self.node_bound {
            Ok(&mut self.node)
        } else {
            Err(FlowLogError::NodeUnavailable)
        }
    }

    fn run(&mut self) -> Result<&mut dyn RunHandle, FlowLogError> {
        if self.run_bound {
            Ok(&mut self.run)
        } else {
            Err(FlowLogError::RunUnavailable)
        }
    }

    fn console(&mut self) -> Result<&mut dyn ConsoleSink, FlowLogError> {
        if self.console_bound {
            Ok(&mut self.console)
        } else {
            Err(FlowLogError::ConsoleUnavailable)
        }
    }
}
