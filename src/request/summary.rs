use serde_json::{Map, Value};

use crate::constants::{FALLBACK_SUMMARY, NAMED_ARG_LABEL, NAMED_ARG_LABEL_ENCODED};

use super::builder::decode_label;

/// Texto corto para mostrar una llamada en el host.
///
/// Preferencia: `labelEncoded` no nulo y decodificable, luego el `label`
/// literal, luego el texto fijo `"Click for details"`. Un encoded que no
/// decodifica cae al siguiente candidato: el resumen es solo display y
/// nunca debe fallar.
pub fn call_summary(named_args: &Map<String, Value>) -> String {
    if let Some(Value::String(encoded)) = named_args.get(NAMED_ARG_LABEL_ENCODED) {
        if let Ok(decoded) = decode_label(encoded) {
            return decoded;
        }
    }
    match named_args.get(NAMED_ARG_LABEL) {
        Some(Value::String(label)) => label.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => FALLBACK_SUMMARY.to_string(),
    }
}
