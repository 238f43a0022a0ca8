use crate::models::{ChatMessage, Language, QuizQuestion};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("assistant returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("assistant response is malformed: {0}")]
    Malformed(String),
    #[error("generated question '{id}' is invalid: {reason}")]
    InvalidQuestion { id: String, reason: String },
}

/// Boundary to the external language-model service. Both operations are
/// single-shot request/response calls: no retry, no streaming, no
/// cancellation.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    async fn generate_questions(
        &self,
        topic: &str,
        count: u32,
    ) -> Result<Vec<QuizQuestion>, GatewayError>;

    async fn chat(
        &self,
        history: &[ChatMessage],
        message: &str,
        language: Language,
    ) -> Result<String, GatewayError>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
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

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    async fn send(&self, request: &GenerateContentRequest) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Api { status, body });
        }

        let payload: GenerateContentResponse = response.json().await?;
        extract_text(&payload)
    }
}

#[async_trait]
impl AssistantGateway for GeminiClient {
    async fn generate_questions(
        &self,
        topic: &str,
        count: u32,
    ) -> Result<Vec<QuizQuestion>, GatewayError> {
        tracing::debug!("Requesting {} generated questions about '{}'", count, topic);

        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), generation_prompt(topic, count))],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        let text = self.send(&request).await?;
        let questions = parse_generated_questions(&text)?;
        tracing::info!(
            "Assistant generated {} questions about '{}'",
            questions.len(),
            topic
        );
        Ok(questions)
    }

    async fn chat(
        &self,
        history: &[ChatMessage],
        message: &str,
        language: Language,
    ) -> Result<String, GatewayError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|entry| Content::text(Some(entry.role.as_str()), entry.text.clone()))
            .collect();
        contents.push(Content::text(Some("user"), message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::text(None, chat_instruction(language))),
            generation_config: None,
        };

        self.send(&request).await
    }
}

fn extract_text(payload: &GenerateContentResponse) -> Result<String, GatewayError> {
    let text: String = payload
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GatewayError::Malformed(
            "response contains no candidate text".to_string(),
        ));
    }
    Ok(text)
}

/// Parses and validates the generated-question payload. The model reply is
/// untrusted input: non-conforming records are rejected, never coerced, and
/// a single bad record fails the whole batch so nothing partial reaches the
/// bank.
pub fn parse_generated_questions(raw: &str) -> Result<Vec<QuizQuestion>, GatewayError> {
    let trimmed = strip_code_fence(raw.trim());

    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|e| GatewayError::Malformed(format!("not valid JSON: {}", e)))?;
    if !value.is_array() {
        return Err(GatewayError::Malformed(
            "expected a JSON array of questions".to_string(),
        ));
    }

    let questions: Vec<QuizQuestion> = serde_json::from_value(value)
        .map_err(|e| GatewayError::Malformed(format!("question record mismatch: {}", e)))?;

    for question in &questions {
        question
            .validate()
            .map_err(|e| GatewayError::InvalidQuestion {
                id: question.id.clone(),
                reason: e.to_string(),
            })?;
    }
    Ok(questions)
}

// Models occasionally wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(raw: &str) -> &str {
    let Some(inner) = raw.strip_prefix("```") else {
        return raw;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn generation_prompt(topic: &str, count: u32) -> String {
    format!(
        "You are an expert IT Business Analyst (ITBA) and Project Manager, deeply familiar \
with BABOK v3 and practical industry experience.\n\
Generate {count} high-quality multiple-choice questions about the topic: \"{topic}\".\n\n\
Guidelines:\n\
1. Maintain technical terms in English (e.g., Stakeholder, Requirement, Backlog, \
Elicitation, Use Case, etc.) even in Vietnamese descriptions.\n\
2. Each question must have exactly 4 options.\n\
3. MANDATORY: The explanation for the correct answer MUST BE DETAILED, between 200-300 \
words per question. The explanation must be structured as follows:\n\
   - Theoretical Context: Reference specific BABOK concepts.\n\
   - Correct Answer Justification: Why this choice is the industry standard.\n\
   - Distractor Analysis: Briefly explain why the other 3 options are incorrect or less \
optimal.\n\
   - Practical Scenario: A real-world example of this concept in action.\n\
4. Provide content in both English and Vietnamese.\n\
5. The Vietnamese translation should be professional and retain technical ITBA jargon in \
English.\n\n\
Return ONLY a JSON array of objects with this exact shape:\n\
{{\"id\": string (unique), \"questionEn\": string, \"questionVi\": string, \
\"optionsEn\": string[4], \"optionsVi\": string[4], \
\"correctAnswerIndex\": number (0-3), \"explanationEn\": string, \"explanationVi\": string}}"
    )
}

fn chat_instruction(language: Language) -> String {
    let answer_language = match language {
        Language::En => "English",
        Language::Vi => "Vietnamese, keeping technical ITBA terms in English",
    };
    format!(
        "You are a senior IT Business Analyst mentor, deeply familiar with BABOK v3. \
Advise on Stakeholders, Requirements, BABOK standards, and career direction. \
Keep answers practical and concise. Answer in {}.",
        answer_language
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAYLOAD: &str = r#"[{
        "id": "gen-1",
        "questionEn": "Which technique elicits requirements from a large audience?",
        "questionVi": "Kỹ thuật nào khơi gợi yêu cầu từ số đông?",
        "optionsEn": ["Survey", "Interview", "Observation", "Prototyping"],
        "optionsVi": ["Survey", "Interview", "Observation", "Prototyping"],
        "correctAnswerIndex": 0,
        "explanationEn": "Surveys scale to large audiences.",
        "explanationVi": "Survey phù hợp với số đông."
    }]"#;

    #[test]
    fn parses_valid_payload() {
        let questions = parse_generated_questions(VALID_PAYLOAD).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "gen-1");
    }

    #[test]
    fn parses_payload_wrapped_in_code_fence() {
        let fenced = format!("```json\n{}\n```", VALID_PAYLOAD);
        let questions = parse_generated_questions(&fenced).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn rejects_non_array_payload() {
        let result = parse_generated_questions(r#"{"questions": []}"#);
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn rejects_record_with_wrong_option_count() {
        let payload = r#"[{
            "id": "gen-1",
            "questionEn": "q",
            "questionVi": "q",
            "optionsEn": ["A", "B", "C"],
            "optionsVi": ["A", "B", "C"],
            "correctAnswerIndex": 0,
            "explanationEn": "",
            "explanationVi": ""
        }]"#;
        let result = parse_generated_questions(payload);
        assert!(matches!(
            result,
            Err(GatewayError::InvalidQuestion { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_answer_index() {
        let payload = VALID_PAYLOAD.replace("\"correctAnswerIndex\": 0", "\"correctAnswerIndex\": 7");
        let result = parse_generated_questions(&payload);
        assert!(matches!(
            result,
            Err(GatewayError::InvalidQuestion { .. })
        ));
    }

    #[test]
    fn generation_prompt_names_topic_and_count() {
        let prompt = generation_prompt("Elicitation", 10);
        assert!(prompt.contains("Elicitation"));
        assert!(prompt.contains("Generate 10"));
    }
}
