use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds de anotación que un nodo puede portar. Un nodo sostiene a lo sumo
/// una anotación de cada kind en simultáneo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// Etiqueta descriptiva del punto de ejecución.
    Label,
    /// Condición de warning/fallo local del nodo.
    Warning,
}

/// Resultado local del nodo que acompaña a una anotación de warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeResult {
    Unstable,
    Failed,
}

/// Estado terminal del run que contiene al nodo.
///
/// Este componente solo transiciona hacia `Failed` (monotónico: un run
/// fallido nunca vuelve atrás por esta vía).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Success,
    Unstable,
    Failed,
}

/// Anotación aplicada sobre un nodo de ejecución.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub message: String,
    /// Solo presente en anotaciones de kind `Warning`.
    pub result: Option<NodeResult>,
    pub ts: DateTime<Utc>, // metadato (no participa en comparaciones)
}

impl Annotation {
    /// Anotación de etiqueta, sin resultado local.
    pub fn label(message: impl Into<String>) -> Self {
        Self { kind: AnnotationKind::Label, message: message.into(), result: None, ts: Utc::now() }
    }

    /// Anotación de warning con el resultado local del nodo.
    pub fn warning(result: NodeResult, message: impl Into<String>) -> Self {
        Self { kind: AnnotationKind::Warning, message: message.into(), result: Some(result), ts: Utc::now() }
    }
}
