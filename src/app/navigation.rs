use super::*;

impl QuizApp {
    /// Arranca la generación: valida el tema y pasa a la pantalla de carga.
    /// La llamada bloqueante se lanza desde allí, cuando el spinner ya está
    /// en pantalla.
    pub fn empezar_generacion(&mut self) {
        // 1) Validar el tema elegido (el constructor rechaza temas en blanco)
        let request = match GenerationRequest::new(self.chosen_topic(), self.difficulty) {
            Some(request) => request.with_count(self.question_count),
            None => {
                self.message = "⚠ Escribe un tema antes de generar el quiz.".into();
                return;
            }
        };

        // 2) Guardar los datos del quiz en curso para título y resumen
        self.quiz_topic = request.topic.clone();
        self.quiz_difficulty = request.difficulty;

        // 3) Dejar la petición pendiente y pasar a la pantalla de carga
        self.pending_request = Some(request);
        self.loading_frames = 0;
        self.session = None;
        self.selected_option = None;
        self.message.clear();
        self.state = AppState::Generating;
    }

    /// Ejecuta la petición pendiente (bloqueante) y entra en el quiz.
    /// `generate` nunca falla hacia fuera, así que siempre hay sesión.
    pub fn run_pending_generation(&mut self) {
        let request = match self.pending_request.take() {
            Some(request) => request,
            None => {
                // Sin petición pendiente no hay nada que generar.
                self.state = AppState::Setup;
                return;
            }
        };

        let questions = self.generator.generate(&request);
        log::info!(
            "quiz listo: {} preguntas sobre {}",
            questions.len(),
            request.topic
        );

        self.session = Some(QuizSession::new(questions));
        self.selected_option = None;
        self.message.clear();
        self.state = AppState::Quiz;
    }

    /// Repite el mismo quiz con las preguntas barajadas de nuevo.
    pub fn repetir_quiz(&mut self) {
        match self.session.as_mut() {
            Some(session) => {
                session.restart();
                self.selected_option = None;
                self.message.clear();
                self.state = AppState::Quiz;
            }
            None => {
                // Sin sesión no hay nada que repetir.
                self.state = AppState::Setup;
            }
        }
    }

    /// Vuelve a la pantalla inicial para configurar otro quiz.
    pub fn nuevo_quiz(&mut self) {
        self.session = None;
        self.pending_request = None;
        self.selected_option = None;
        self.message.clear();
        self.state = AppState::Setup;
    }
}
