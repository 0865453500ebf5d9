// src/generator/mod.rs
//
// Fuente de preguntas: construye el prompt, llama al modelo de texto y
// valida la respuesta contra el esquema fijo. Si cualquier paso falla,
// `generate` devuelve el banco de reserva en lugar de propagar el error.

pub mod gemini;
pub mod prompt;

use serde::Deserialize;
use thiserror::Error;

use crate::data;
use crate::model::{GenerationRequest, Question, OPTION_COUNT};

use gemini::GeminiModel;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("falta la variable de entorno {0}")]
    MissingApiKey(&'static str),
    #[error("fallo del servicio de generación: {0}")]
    Service(String),
    #[error("la respuesta no contiene ningún array JSON")]
    MissingJsonArray,
    #[error("JSON inválido: {0}")]
    Parse(String),
    #[error("pregunta {index} inválida: {reason}")]
    InvalidQuestion { index: usize, reason: String },
    #[error("el array de preguntas está vacío")]
    EmptyBatch,
}

/// Capacidad externa de generación de texto. La implementación real llama
/// a Gemini; los tests enchufan stubs con respuestas fijas.
pub trait TextModel {
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// DTO permisivo para el parseo inicial; la validación posterior lo
/// convierte en un `Question` con el esquema fijo.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct: i64,
}

pub struct QuestionGenerator {
    model: Option<Box<dyn TextModel>>,
}

impl QuestionGenerator {
    /// Generador de producción: usa Gemini si hay clave configurada; si no,
    /// todas las generaciones caerán al banco de reserva.
    pub fn new() -> Self {
        let model = GeminiModel::from_env()
            .map(|model| Box::new(model) as Box<dyn TextModel>);
        if model.is_none() {
            log::warn!(
                "{} no está configurada; se usarán preguntas de reserva",
                gemini::API_KEY_VAR
            );
        }
        Self { model }
    }

    pub fn with_model(model: Box<dyn TextModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Genera las preguntas para la petición dada. Nunca falla hacia fuera:
    /// ante cualquier problema registra la causa y devuelve el banco de
    /// reserva, así que el resultado siempre tiene al menos una pregunta.
    pub fn generate(&self, request: &GenerationRequest) -> Vec<Question> {
        match self.try_generate(request) {
            Ok(questions) => questions,
            Err(err) => {
                log::warn!("generación fallida ({err}); usando preguntas de reserva");
                data::fallback_questions(&request.topic, request.difficulty)
            }
        }
    }

    fn try_generate(&self, request: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
        let model = self
            .model
            .as_deref()
            .ok_or(GenerationError::MissingApiKey(gemini::API_KEY_VAR))?;
        let prompt = prompt::build_prompt(request);
        let text = model.generate_text(&prompt)?;
        parse_questions(&text)
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convierte el texto crudo del modelo en preguntas validadas.
fn parse_questions(text: &str) -> Result<Vec<Question>, GenerationError> {
    // 1) Recortar el array JSON; el modelo a veces lo rodea de prosa o de
    //    vallas de código.
    let json = extract_json_array(text).ok_or(GenerationError::MissingJsonArray)?;

    // 2) Parsear a DTOs permisivos. Un campo ausente en cualquier entrada
    //    invalida el lote entero.
    let raw: Vec<RawQuestion> =
        serde_json::from_str(json).map_err(|err| GenerationError::Parse(err.to_string()))?;
    if raw.is_empty() {
        return Err(GenerationError::EmptyBatch);
    }

    // 3) Validar entrada por entrada; el primer fallo descarta todo.
    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| validate_question(index, raw))
        .collect()
}

// Del primer '[' al último ']', ambos inclusive. Ambos son ASCII, así que
// los índices de byte caen siempre en límite de carácter.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn validate_question(index: usize, raw: RawQuestion) -> Result<Question, GenerationError> {
    let option_count = raw.options.len();
    let options: [String; OPTION_COUNT] =
        raw.options
            .try_into()
            .map_err(|_| GenerationError::InvalidQuestion {
                index,
                reason: format!("tiene {option_count} opciones (se esperaban {OPTION_COUNT})"),
            })?;

    if raw.correct < 0 || raw.correct >= OPTION_COUNT as i64 {
        return Err(GenerationError::InvalidQuestion {
            index,
            reason: format!("respuesta correcta fuera de rango: {}", raw.correct),
        });
    }

    Ok(Question {
        text: raw.question,
        options,
        correct: raw.correct as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    struct StaticModel(&'static str);

    impl TextModel for StaticModel {
        fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    impl TextModel for FailingModel {
        fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Service("HTTP 503".to_string()))
        }
    }

    const VALID_RESPONSE: &str = r#"Here are your questions:
[
  {"question": "¿Capital de Francia?", "options": ["Londres", "París", "Roma", "Berlín"], "correct": 1},
  {"question": "¿2 + 3?", "options": ["4", "5", "6", "7"], "correct": 1},
  {"question": "¿Color del cielo?", "options": ["Azul", "Verde", "Rojo", "Negro"], "correct": 0},
  {"question": "¿Planeta rojo?", "options": ["Venus", "Júpiter", "Marte", "Saturno"], "correct": 2},
  {"question": "¿Autor del Quijote?", "options": ["Lope", "Góngora", "Quevedo", "Cervantes"], "correct": 3}
]
Good luck!"#;

    fn request() -> GenerationRequest {
        GenerationRequest::new("Historia", Difficulty::Medium).unwrap()
    }

    #[test]
    fn valid_response_becomes_validated_questions() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(VALID_RESPONSE)));
        let questions = generator.generate(&request());
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].text, "¿Capital de Francia?");
        assert_eq!(questions[0].correct_text(), "París");
        for q in &questions {
            assert!(q.correct < OPTION_COUNT);
        }
    }

    #[test]
    fn fenced_json_is_extracted() {
        let fenced = "```json\n[{\"question\": \"Q\", \"options\": [\"a\", \"b\", \"c\", \"d\"], \"correct\": 0}]\n```";
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(fenced)));
        let questions = generator.generate(&request());
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Q");
    }

    #[test]
    fn prose_without_array_falls_back() {
        let generator =
            QuestionGenerator::with_model(Box::new(StaticModel("Lo siento, no puedo ayudarte.")));
        let result = generator.try_generate(&request());
        assert!(matches!(result, Err(GenerationError::MissingJsonArray)));

        let questions = generator.generate(&request());
        assert_eq!(questions.len(), 3);
        assert!(questions[0].text.contains("Historia"));
    }

    #[test]
    fn missing_field_invalidates_the_whole_batch() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(
            r#"[{"question": "Q", "options": ["a", "b", "c", "d"]}]"#,
        )));
        let result = generator.try_generate(&request());
        assert!(matches!(result, Err(GenerationError::Parse(_))));
        assert_eq!(generator.generate(&request()).len(), 3);
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(
            r#"[{"question": "Q", "options": ["a", "b", "c"], "correct": 0}]"#,
        )));
        match generator.try_generate(&request()) {
            Err(GenerationError::InvalidQuestion { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("3 opciones"));
            }
            other => panic!("se esperaba InvalidQuestion, llegó {other:?}"),
        }
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(
            r#"[{"question": "Q", "options": ["a", "b", "c", "d"], "correct": 5}]"#,
        )));
        assert!(matches!(
            generator.try_generate(&request()),
            Err(GenerationError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn one_bad_entry_discards_valid_siblings() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel(
            r#"[
                {"question": "Buena", "options": ["a", "b", "c", "d"], "correct": 0},
                {"question": "Mala", "options": ["a", "b", "c", "d"], "correct": -1}
            ]"#,
        )));
        assert!(matches!(
            generator.try_generate(&request()),
            Err(GenerationError::InvalidQuestion { index: 1, .. })
        ));
        // Hacia fuera: el lote entero se sustituye por la reserva.
        assert_eq!(generator.generate(&request()).len(), 3);
    }

    #[test]
    fn empty_array_is_a_failure() {
        let generator = QuestionGenerator::with_model(Box::new(StaticModel("[]")));
        assert!(matches!(
            generator.try_generate(&request()),
            Err(GenerationError::EmptyBatch)
        ));
        assert!(!generator.generate(&request()).is_empty());
    }

    #[test]
    fn service_failure_falls_back() {
        let generator = QuestionGenerator::with_model(Box::new(FailingModel));
        let questions = generator.generate(&request());
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn missing_model_falls_back() {
        let generator = QuestionGenerator { model: None };
        assert!(!generator.has_model());
        assert!(matches!(
            generator.try_generate(&request()),
            Err(GenerationError::MissingApiKey(_))
        ));
        assert_eq!(generator.generate(&request()).len(), 3);
    }

    #[test]
    fn extract_json_array_spans_first_to_last_bracket() {
        assert_eq!(extract_json_array("x [1, 2] y"), Some("[1, 2]"));
        assert_eq!(extract_json_array("[[1], [2]] cola"), Some("[[1], [2]]"));
        assert_eq!(extract_json_array("sin corchetes"), None);
        assert_eq!(extract_json_array("] al revés ["), None);
    }
}
