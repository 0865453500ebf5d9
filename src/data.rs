// src/data.rs

use crate::model::{Difficulty, Question};

/// Banco de reserva: preguntas genéricas que se usan cuando la generación
/// externa falla. Siempre válidas, parametrizadas por tema y dificultad.
pub fn fallback_questions(topic: &str, difficulty: Difficulty) -> Vec<Question> {
    let nivel = difficulty.label();
    vec![
        Question {
            text: format!("Pregunta de ejemplo ({nivel}) sobre {topic}: ¿cuánto es 2 + 2?"),
            options: ["3", "4", "5", "6"].map(String::from),
            correct: 1,
        },
        Question {
            text: format!("Otra pregunta ({nivel}) sobre {topic}: ¿qué número es mayor?"),
            options: ["10", "5", "15", "8"].map(String::from),
            correct: 2,
        },
        Question {
            text: format!("Última pregunta ({nivel}) sobre {topic}: ¿cuál es la buena práctica?"),
            options: ["Opción A", "Opción B", "Opción C", "Opción D"].map(String::from),
            correct: 0,
        },
    ]
}
