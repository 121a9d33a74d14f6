//! Constantes compartidas del crate.

/// Texto de resumen cuando la llamada no trae ningún label utilizable.
pub const FALLBACK_SUMMARY: &str = "Click for details";

/// Claves de los argumentos nombrados que entrega el DSL host.
pub const NAMED_ARG_LABEL: &str = "label";
pub const NAMED_ARG_LABEL_ENCODED: &str = "labelEncoded";
