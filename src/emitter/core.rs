//! Core del LogEmitter: aplica el veredicto y escribe la consola.

use uuid::Uuid;

use crate::context::{Annotation, NodeResult, RunStatus, StepContext};
use crate::errors::FlowLogError;
use crate::request::LogRequest;
use crate::severity::Verdict;

/// Orquesta una llamada de logging de punta a punta.
///
/// Sin estado propio: cada `emit` es una invocación lógica independiente y
/// síncrona. La serialización de mutaciones sobre un mismo nodo es
/// responsabilidad del host (ver `ExecutionNode`).
pub struct LogEmitter;

impl LogEmitter {
    /// Ejecuta una llamada: aplica el veredicto de severidad sobre nodo y
    /// run (salvo supresión), escribe label y mensaje en consola y retorna
    /// el id del nodo anotado.
    ///
    /// Orden de efectos dentro de la llamada: anotación antes que consola;
    /// línea de label antes que líneas de mensaje. Un colaborador ausente
    /// aborta la llamada completa sin garantía de efecto parcial.
    pub fn emit(request: &LogRequest, ctx: &mut impl StepContext) -> Result<Uuid, FlowLogError> {
        let severity = request.severity;
        log::trace!("emit severity={} label_len={} suppress={}",
                    severity,
                    request.label.len(),
                    request.suppress_annotation);

        if !request.suppress_annotation {
            match Verdict::for_severity(severity, &request.label) {
                Verdict::None => {}
                Verdict::Degraded(msg) => {
                    ctx.execution_node()?
                       .replace_annotation(Annotation::warning(NodeResult::Unstable, msg));
                }
                Verdict::Failed(msg) => {
                    ctx.execution_node()?
                       .replace_annotation(Annotation::warning(NodeResult::Failed, msg));
                }
                Verdict::FailedPropagate(msg) => {
                    ctx.execution_node()?
                       .replace_annotation(Annotation::warning(NodeResult::Failed, msg));
                    // FATAL fuerza el run a FAILED sin mirar su estado actual
                    ctx.run()?.set_status(RunStatus::Failed);
                }
            }
        }

        let tag = severity.as_str();
        // label vacío y message vacío suprimen su salida de forma independiente
        if !request.label.is_empty() {
            ctx.console()?.println(&format!("[{}] {}", tag, request.label));
        }
        // los '\n' finales no generan líneas vacías; los segmentos vacíos
        // interiores sí se conservan
        let body = request.message.trim_end_matches('\n');
        if !body.is_empty() {
            for line in body.split('\n') {
                ctx.console()?.println(&format!("[{}] {}", tag, line));
            }
        }

        Ok(ctx.execution_node()?.id())
    }
}
