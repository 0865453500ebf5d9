use crate::generator::QuestionGenerator;
use crate::model::{AppState, Difficulty, GenerationRequest, DEFAULT_QUESTION_COUNT};
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

/// Temas predefinidos del selector; además hay un campo de tema libre.
pub const TOPIC_PRESETS: [&str; 6] = [
    "Programación en Python",
    "Matemáticas",
    "Ciencia",
    "Historia",
    "Geografía",
    "Literatura",
];

pub struct QuizApp {
    // Configuración elegida en la pantalla inicial
    pub selected_topic: usize, // índice en TOPIC_PRESETS
    pub use_custom_topic: bool,
    pub custom_topic: String,
    pub difficulty: Difficulty,
    pub question_count: usize,

    // Núcleo
    pub generator: QuestionGenerator,
    pub session: Option<QuizSession>,

    // Quiz en curso
    pub quiz_topic: String,
    pub quiz_difficulty: Difficulty,
    pub selected_option: Option<usize>,

    // Presentación
    pub message: String,
    pub state: AppState,
    pub pending_request: Option<GenerationRequest>,
    pub loading_frames: u8, // frames pintados desde que entró en Generating
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_generator(QuestionGenerator::new())
    }

    /// Constructor con generador inyectado; los tests le pasan stubs.
    pub fn with_generator(generator: QuestionGenerator) -> Self {
        Self {
            selected_topic: 0,
            use_custom_topic: false,
            custom_topic: String::new(),
            difficulty: Difficulty::Medium,
            question_count: DEFAULT_QUESTION_COUNT,
            generator,
            session: None,
            quiz_topic: String::new(),
            quiz_difficulty: Difficulty::Medium,
            selected_option: None,
            message: String::new(),
            state: AppState::Setup,
            pending_request: None,
            loading_frames: 0,
        }
    }

    /// Tema efectivo según la selección actual (preset o campo libre).
    pub fn chosen_topic(&self) -> &str {
        if self.use_custom_topic {
            self.custom_topic.as_str()
        } else {
            TOPIC_PRESETS
                .get(self.selected_topic)
                .copied()
                .unwrap_or(TOPIC_PRESETS[0])
        }
    }
}
