use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::errors::FlowLogError;
use crate::severity::Severity;

/// Input de una invocación del paso de logging.
///
/// Invariante: `message` y `label` son siempre strings no nulos al llegar al
/// emitter (string vacío permitido, ausencia no).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    pub message: String,
    pub label: String,
    pub severity: Severity,
    /// Si es true se saltea la anotación de nodo/run por completo; la
    /// salida de consola ocurre igual.
    pub suppress_annotation: bool,
}

impl LogRequest {
    pub fn builder() -> LogRequestBuilder {
        LogRequestBuilder::default()
    }
}

/// Builder del request según el contrato del DSL host.
///
/// `label_encoded` existe para sortear una limitación del host: los
/// argumentos de texto plano que referencian valores dinámicos de entorno
/// llegan nulificados a las rutas de descriptor/metadata; un payload base64
/// pasa intacto y se decodifica acá.
#[derive(Debug, Default, Clone)]
pub struct LogRequestBuilder {
    message: Option<String>,
    label: Option<String>,
    label_encoded: Option<String>,
    log_level: Option<String>,
    skip_ui_coloring: bool,
}

impl LogRequestBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_encoded(mut self, encoded: impl Into<String>) -> Self {
        self.label_encoded = Some(encoded.into());
        self
    }

    /// Texto libre, case-insensitive; cae a INFO si no matchea ningún nivel.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn skip_ui_coloring(mut self, skip: bool) -> Self {
        self.skip_ui_coloring = skip;
        self
    }

    /// Valida y construye el request.
    ///
    /// `message` es obligatorio, igual que exactamente uno de
    /// `label`/`label_encoded` (el label plano gana si vienen ambos). La
    /// severidad se resuelve acá una única vez, así el emitter consume un
    /// `Severity` ya válido.
    pub fn build(self) -> Result<LogRequest, FlowLogError> {
        let message = self.message.ok_or(FlowLogError::MissingMessage)?;
        let label = match (self.label, self.label_encoded) {
            (Some(label), _) => label,
            (None, Some(encoded)) => decode_label(&encoded)?,
            (None, None) => return Err(FlowLogError::MissingLabel),
        };
        let severity = Severity::resolve(self.log_level.as_deref());
        Ok(LogRequest { message, label, severity, suppress_annotation: self.skip_ui_coloring })
    }
}

/// Decodifica un label base64 a UTF-8. Falla como error de construcción,
/// antes de tocar cualquier colaborador.
pub(crate) fn decode_label(encoded: &str) -> Result<String, FlowLogError> {
    let bytes = B64.decode(encoded)
                   .map_err(|e| FlowLogError::InvalidLabelEncoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FlowLogError::InvalidLabelEncoding(e.to_string()))
}
