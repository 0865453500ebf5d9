use super::*;
use crate::model::Question;

impl QuizApp {
    /// Cabecera "Pregunta N de M" mientras el quiz sigue en curso.
    pub fn progress_text(&self) -> String {
        match &self.session {
            Some(session) if !session.is_complete() => format!(
                "Pregunta {} de {}",
                session.current_index() + 1,
                session.total()
            ),
            _ => String::new(),
        }
    }

    /// Marcador "Puntuación: X / Y".
    pub fn score_text(&self) -> String {
        match &self.session {
            Some(session) => format!("Puntuación: {} / {}", session.score(), session.total()),
            None => String::new(),
        }
    }

    pub fn quiz_title(&self) -> String {
        format!(
            "Quiz: {} ({})",
            self.quiz_topic,
            self.quiz_difficulty.label()
        )
    }

    /// Copia de la pregunta actual, para pintarla sin retener el préstamo
    /// de la sesión.
    pub fn current_question(&self) -> Option<Question> {
        self.session
            .as_ref()
            .and_then(|session| session.current_question().cloned())
    }

    pub fn is_answered(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.is_answered())
            .unwrap_or(false)
    }

    /// `true` cuando la pregunta en pantalla es la última del quiz.
    pub fn is_on_last_question(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.current_index() + 1 >= session.total())
            .unwrap_or(false)
    }
}
