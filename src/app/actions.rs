use super::*;
use crate::session::{AnswerOutcome, SessionError};

impl QuizApp {
    /// Envía la opción marcada para la pregunta actual y deja el resultado
    /// en `message`.
    pub fn enviar_respuesta(&mut self) {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => {
                self.message = "Error interno: no hay quiz en curso.".into();
                return;
            }
        };

        match session.submit(self.selected_option) {
            Ok(AnswerOutcome::Correct) => {
                self.message = "✅ ¡Correcto!".into();
            }
            Ok(AnswerOutcome::Incorrect { correct_index }) => {
                let correcta = session
                    .current_question()
                    .map(|q| q.options[correct_index].clone())
                    .unwrap_or_default();
                self.message = format!("❌ Incorrecto. La respuesta correcta era: {correcta}");
            }
            Err(SessionError::NoSelection) => {
                self.message = "⚠ Selecciona una opción antes de enviar.".into();
            }
            Err(err) => {
                // Inalcanzable con el flujo normal de la UI.
                self.message = format!("Error interno: {err}");
            }
        }
    }

    /// Pasa a la siguiente pregunta; tras la última muestra el resumen.
    pub fn siguiente_pregunta(&mut self) {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => {
                self.message = "Error interno: no hay quiz en curso.".into();
                return;
            }
        };

        match session.advance() {
            Ok(()) => {
                self.selected_option = None;
                self.message.clear();
                if session.is_complete() {
                    self.state = AppState::Summary;
                }
            }
            Err(err) => {
                self.message = format!("Error interno: {err}");
            }
        }
    }
}
