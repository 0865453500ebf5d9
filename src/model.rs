use serde::{Deserialize, Serialize};

/// Número fijo de opciones por pregunta.
pub const OPTION_COUNT: usize = 4;

/// Cuántas preguntas se piden al generador si nadie indica otra cosa.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Pregunta de opción múltiple ya validada.
///
/// Serializa exactamente en el formato de intercambio del generador:
/// `{ "question": ..., "options": [...], "correct": n }`. El array fijo
/// garantiza la aridad de 4 opciones; `correct` siempre indexa en `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct: usize,
}

impl Question {
    /// Texto de la opción correcta, para los mensajes de resultado.
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct]
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Etiqueta para la interfaz.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }

    /// Término en minúsculas que se inserta en el prompt.
    pub fn prompt_term(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Petición de generación. Se construye por quiz y no se persiste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
}

impl GenerationRequest {
    /// Devuelve `None` si el tema queda vacío tras recortar espacios:
    /// la petición siempre lleva un tema no vacío.
    pub fn new(topic: &str, difficulty: Difficulty) -> Option<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return None;
        }
        Some(Self {
            topic: topic.to_string(),
            difficulty,
            count: DEFAULT_QUESTION_COUNT,
        })
    }

    /// Cambia el número de preguntas pedidas (mínimo 1).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }
}

/// Franja de nota del resumen final. Los umbrales 80/60/40 son constantes
/// de diseño, no configurables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Fair,
    KeepPracticing,
}

impl GradeBand {
    /// Banda para `score` aciertos sobre `total` preguntas.
    ///
    /// Usa porcentaje entero (truncado) para que los límites inferiores
    /// inclusivos 80/60/40 sean exactos.
    pub fn from_score(score: usize, total: usize) -> Self {
        let pct = if total == 0 { 0 } else { 100 * score / total };
        if pct >= 80 {
            GradeBand::Excellent
        } else if pct >= 60 {
            GradeBand::Good
        } else if pct >= 40 {
            GradeBand::Fair
        } else {
            GradeBand::KeepPracticing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "¡Excelente! 🌟",
            GradeBand::Good => "¡Bien! 👍",
            GradeBand::Fair => "Aceptable 📚",
            GradeBand::KeepPracticing => "¡Sigue practicando! 💪",
        }
    }
}

/// Pantallas de la aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Generating,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Setup
    }
}
