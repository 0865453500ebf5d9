// src/generator/gemini.rs
//
// Implementación real de `TextModel` sobre la API REST de Gemini
// (generateContent). La clave y el nombre del modelo vienen del entorno.

use serde::{Deserialize, Serialize};

use crate::generator::{GenerationError, TextModel};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "AI_QUIZ_MODEL";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiModel {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GeminiModel {
    /// Lee la configuración del entorno. Devuelve `None` si no hay clave;
    /// el nombre del modelo es opcional y tiene un valor por defecto.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())?;
        let model = std::env::var(MODEL_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Some(Self::new(api_key, model))
    }

    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::blocking::Client::new(),
        }
    }

    // La clave viaja en la query string; no registrar esta URL en los logs.
    fn endpoint(&self) -> String {
        format!(
            "{BASE_URL}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

impl TextModel for GeminiModel {
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        log::debug!("enviando prompt a Gemini (modelo {})", self.model);
        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .map_err(|err| {
                GenerationError::Service(format!("error conectando con Gemini: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Service(format!(
                "Gemini devolvió HTTP {status}{}",
                if body.trim().is_empty() {
                    String::new()
                } else {
                    format!(". Body: {}", body.trim())
                }
            )));
        }

        let body = response.json::<GenerateContentResponse>().map_err(|err| {
            GenerationError::Service(format!("respuesta JSON inválida de Gemini: {err}"))
        })?;

        first_candidate_text(body).ok_or_else(|| {
            GenerationError::Service("Gemini no devolvió ningún candidato con texto".to_string())
        })
    }
}

fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
