// src/session.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::model::{GradeBand, Question, OPTION_COUNT};

/// Fase de la sesión: cada pregunta pasa por "esperando respuesta" y
/// "respondida" antes de avanzar; al agotar las preguntas la sesión queda
/// completa y solo admite `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    Answered,
    Complete,
}

/// Resultado de enviar una respuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_index: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no hay ninguna opción seleccionada")]
    NoSelection,
    #[error("la pregunta actual ya fue respondida")]
    AlreadyAnswered,
    #[error("la pregunta actual todavía no fue respondida")]
    NotAnswered,
    #[error("el cuestionario ya terminó")]
    QuizComplete,
}

impl SessionError {
    /// `NoSelection` es un error del usuario (no marcó nada); el resto
    /// indica que el llamante rompió el protocolo enviar/avanzar.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, SessionError::NoSelection)
    }
}

/// Sesión de quiz: recorre un conjunto de preguntas en orden barajado,
/// acumula la puntuación y expone el avance pregunta a pregunta.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    phase: Phase,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    /// Igual que `new` pero con un generador fijado, para poder reproducir
    /// el orden en los tests.
    pub fn with_rng(questions: Vec<Question>, rng: StdRng) -> Self {
        let mut session = Self {
            questions,
            current: 0,
            score: 0,
            phase: Phase::AwaitingAnswer,
            rng,
        };
        session.shuffle_and_reset();
        session
    }

    // Baraja las preguntas y deja la sesión al principio.
    fn shuffle_and_reset(&mut self) {
        self.questions.shuffle(&mut self.rng);
        self.current = 0;
        self.score = 0;
        self.phase = if self.questions.is_empty() {
            Phase::Complete
        } else {
            Phase::AwaitingAnswer
        };
    }

    /// Envía la opción seleccionada para la pregunta actual.
    ///
    /// Suma un punto si acierta y deja la pregunta en fase `Answered`;
    /// volver a enviar sin avanzar es un error y no cambia nada.
    pub fn submit(&mut self, selected: Option<usize>) -> Result<AnswerOutcome, SessionError> {
        // 1) La fase manda: no se responde dos veces ni tras terminar.
        match self.phase {
            Phase::Answered => return Err(SessionError::AlreadyAnswered),
            Phase::Complete => return Err(SessionError::QuizComplete),
            Phase::AwaitingAnswer => {}
        }

        // 2) Validar la selección antes de tocar el estado.
        let selected = match selected {
            Some(i) if i < OPTION_COUNT => i,
            _ => return Err(SessionError::NoSelection),
        };

        // 3) Puntuar y marcar la pregunta como respondida.
        let correct_index = self.questions[self.current].correct;
        self.phase = Phase::Answered;
        if selected == correct_index {
            self.score += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect { correct_index })
        }
    }

    /// Avanza a la siguiente pregunta; tras la última, la sesión queda
    /// completa. Solo es válido después de haber respondido.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::AwaitingAnswer => return Err(SessionError::NotAnswered),
            Phase::Complete => return Err(SessionError::QuizComplete),
            Phase::Answered => {}
        }

        if self.current + 1 >= self.questions.len() {
            self.phase = Phase::Complete;
        } else {
            self.current += 1;
            self.phase = Phase::AwaitingAnswer;
        }
        Ok(())
    }

    /// Vuelve a empezar con el mismo conjunto de preguntas, en un orden
    /// nuevo. Válido en cualquier fase.
    pub fn restart(&mut self) {
        self.shuffle_and_reset();
    }

    /// Pregunta en curso, o `None` si la sesión ya terminó.
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == Phase::Complete {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_answered(&self) -> bool {
        self.phase == Phase::Answered
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Porcentaje de aciertos sobre el total, para mostrar en pantalla.
    pub fn percentage(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.score as f32 * 100.0 / self.questions.len() as f32
    }

    pub fn grade_band(&self) -> GradeBand {
        GradeBand::from_score(self.score, self.questions.len())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                text: format!("Pregunta {i}"),
                options: ["a", "b", "c", "d"].map(String::from),
                correct: i % OPTION_COUNT,
            })
            .collect()
    }

    fn seeded_session(n: usize, seed: u64) -> QuizSession {
        QuizSession::with_rng(sample_questions(n), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn full_run_scores_every_correct_answer() {
        let mut session = seeded_session(5, 7);
        for _ in 0..5 {
            let correct = session.current_question().map(|q| q.correct);
            let outcome = session.submit(correct);
            assert_eq!(outcome, Ok(AnswerOutcome::Correct));
            session.advance().ok();
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), 5);
        assert_eq!(session.grade_band(), GradeBand::Excellent);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn wrong_answer_reports_the_correct_index() {
        let mut session = seeded_session(3, 1);
        let correct = session
            .current_question()
            .map(|q| q.correct)
            .unwrap();
        let wrong = (correct + 1) % OPTION_COUNT;
        let outcome = session.submit(Some(wrong));
        assert_eq!(
            outcome,
            Ok(AnswerOutcome::Incorrect {
                correct_index: correct
            })
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn double_submit_is_rejected_without_changing_state() {
        let mut session = seeded_session(3, 2);
        let correct = session.current_question().map(|q| q.correct);
        session.submit(correct).unwrap();
        let score_before = session.score();

        let second = session.submit(correct);
        assert_eq!(second, Err(SessionError::AlreadyAnswered));
        assert_eq!(session.score(), score_before);
        assert_eq!(session.current_index(), 0);
        assert!(session.is_answered());
    }

    #[test]
    fn missing_or_out_of_range_selection_is_rejected() {
        let mut session = seeded_session(3, 3);

        assert_eq!(session.submit(None), Err(SessionError::NoSelection));
        assert_eq!(
            session.submit(Some(OPTION_COUNT)),
            Err(SessionError::NoSelection)
        );
        // La pregunta sigue abierta: una selección válida entra bien.
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert!(session.submit(Some(0)).is_ok());
    }

    #[test]
    fn advance_requires_an_answer_first() {
        let mut session = seeded_session(2, 4);
        assert_eq!(session.advance(), Err(SessionError::NotAnswered));

        session.submit(Some(0)).unwrap();
        assert!(session.advance().is_ok());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn only_missing_selection_is_a_user_error() {
        assert!(!SessionError::NoSelection.is_contract_violation());
        assert!(SessionError::AlreadyAnswered.is_contract_violation());
        assert!(SessionError::NotAnswered.is_contract_violation());
        assert!(SessionError::QuizComplete.is_contract_violation());
    }

    #[test]
    fn submit_and_advance_after_completion_fail() {
        let mut session = seeded_session(1, 5);
        session.submit(Some(0)).unwrap();
        session.advance().unwrap();
        assert!(session.is_complete());

        assert_eq!(session.submit(Some(0)), Err(SessionError::QuizComplete));
        assert_eq!(session.advance(), Err(SessionError::QuizComplete));
    }

    #[test]
    fn restart_reshuffles_the_same_question_set() {
        let mut session = seeded_session(6, 8);
        let mut before: Vec<String> = session
            .questions()
            .iter()
            .map(|q| q.text.clone())
            .collect();

        session.submit(Some(0)).unwrap();
        session.advance().unwrap();
        session.restart();

        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);

        let mut after: Vec<String> = session
            .questions()
            .iter()
            .map(|q| q.text.clone())
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_yields_the_same_order() {
        let a = seeded_session(6, 42);
        let b = seeded_session(6, 42);
        let order = |s: &QuizSession| -> Vec<String> {
            s.questions().iter().map(|q| q.text.clone()).collect()
        };
        assert_eq!(order(&a), order(&b));
    }

    #[test]
    fn empty_set_completes_immediately() {
        let mut session = seeded_session(0, 9);
        assert!(session.is_complete());
        assert_eq!(session.total(), 0);
        assert_eq!(session.percentage(), 0.0);
        assert_eq!(session.grade_band(), GradeBand::KeepPracticing);
        assert_eq!(session.submit(Some(0)), Err(SessionError::QuizComplete));
    }

    #[test]
    fn percentage_tracks_score_over_total() {
        let mut session = seeded_session(4, 10);
        for _ in 0..4 {
            let correct = session.current_question().map(|q| q.correct);
            session.submit(correct).unwrap();
            session.advance().ok();
        }
        assert_eq!(session.percentage(), 100.0);

        session.restart();
        for _ in 0..4 {
            let correct = session
                .current_question()
                .map(|q| q.correct)
                .unwrap();
            let wrong = (correct + 1) % OPTION_COUNT;
            session.submit(Some(wrong)).unwrap();
            session.advance().ok();
        }
        assert_eq!(session.percentage(), 0.0);
    }
}
