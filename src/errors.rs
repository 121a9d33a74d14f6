//! Errores del paso de logging (construcción y colaboradores).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Taxonomía completa del crate. Los tres primeros son errores de
/// construcción del request; los tres últimos, colaboradores no ligados al
/// contexto actual (fatales, sin retry). Un texto de severidad no parseable
/// NO es un error: degrada a INFO en silencio.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum FlowLogError {
    #[error("message field must be defined")] MissingMessage,
    #[error("label or label_encoded field must be defined")] MissingLabel,
    #[error("label_encoded is not valid base64/utf-8: {0}")] InvalidLabelEncoding(String),
    #[error("no execution node bound to the current context")] NodeUnavailable,
    #[error("no run bound to the current context")] RunUnavailable,
    #[error("console stream unavailable in the current context")] ConsoleUnavailable,
}
