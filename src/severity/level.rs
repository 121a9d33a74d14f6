use std::fmt;

use serde::{Deserialize, Serialize};

/// Niveles de severidad del paso de logging.
///
/// El orden total viene dado por la posición de declaración; en este core se
/// usa solo para identidad y display, nunca para comparar niveles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Nombre en mayúsculas, tal como se prefija en cada línea de consola.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Nivel por defecto cuando el texto de entrada no matchea ninguno.
    pub fn default_value() -> Severity {
        Severity::Info
    }

    /// Resuelve texto libre a un nivel, case-insensitive.
    ///
    /// Contrato de lenidad: texto ausente o no reconocido degrada en
    /// silencio a `INFO`, nunca falla. Un caller que pasa texto libre no
    /// debe tumbar un pipeline por un typo en el nivel.
    pub fn resolve(text: Option<&str>) -> Severity {
        let Some(raw) = text else {
            return Severity::default_value();
        };
        match raw.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Severity::Trace,
            "DEBUG" => Severity::Debug,
            "INFO" => Severity::Info,
            "WARN" => Severity::Warn,
            "ERROR" => Severity::Error,
            "FATAL" => Severity::Fatal,
            _ => {
                log::debug!("log level '{}' not recognized, falling back to INFO", raw);
                Severity::default_value()
            }
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
