use serde::{Deserialize, Serialize};

use super::Severity;

/// Veredicto que la política asigna a una severidad.
///
/// El payload de los veredictos con mensaje es siempre el `label` del
/// request, nunca el cuerpo del mensaje: la anotación muestra el label
/// corto, la consola lleva el cuerpo completo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Sin efecto de anotación.
    None,
    /// El nodo queda anotado como inestable; el run no se toca.
    Degraded(String),
    /// El nodo queda anotado como fallido; el run no se toca.
    Failed(String),
    /// Nodo fallido y el run completo se fuerza a FAILED, sin importar su
    /// estado actual.
    FailedPropagate(String),
}

impl Verdict {
    /// Mapeo total severidad -> veredicto. Match exhaustivo: agregar un
    /// nivel nuevo obliga a decidir acá su efecto.
    pub fn for_severity(severity: Severity, label: &str) -> Verdict {
        match severity {
            Severity::Trace | Severity::Debug | Severity::Info => Verdict::None,
            Severity::Warn => Verdict::Degraded(label.to_string()),
            Severity::Error => Verdict::Failed(label.to_string()),
            Severity::Fatal => Verdict::FailedPropagate(label.to_string()),
        }
    }
}
