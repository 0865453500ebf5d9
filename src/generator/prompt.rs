// src/generator/prompt.rs

use crate::model::{GenerationRequest, OPTION_COUNT};

/// Prompt en inglés para el modelo: pide exactamente `count` preguntas del
/// tema y nivel indicados y obliga a responder solo con el array JSON del
/// esquema fijo.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let topic = &request.topic;
    let difficulty = request.difficulty.prompt_term();
    let count = request.count;

    format!(
        r#"Create exactly {count} multiple choice quiz questions about {topic} with {difficulty} difficulty level.

Requirements:
- Each question should have exactly {OPTION_COUNT} options (A, B, C, D)
- Only one correct answer per question
- Questions should be appropriate for {difficulty} level
- Return the response in valid JSON format only, no additional text

Format your response as a JSON array like this:
[
    {{
        "question": "Your question here?",
        "options": ["Option A", "Option B", "Option C", "Option D"],
        "correct": 0
    }},
    {{
        "question": "Another question?",
        "options": ["Option A", "Option B", "Option C", "Option D"],
        "correct": 2
    }}
]

Topic: {topic}
Difficulty: {difficulty}
Number of questions: {count}"#
    )
}
