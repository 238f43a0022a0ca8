use async_trait::async_trait;
use studyhub::models::{ChatMessage, Language, QuizQuestion};
use studyhub::services::assistant_service::{AssistantGateway, GatewayError};

mod common;

/// Gateway double returning a fixed batch, so the merge path can be tested
/// without a network.
struct CannedGateway {
    questions: Vec<QuizQuestion>,
}

#[async_trait]
impl AssistantGateway for CannedGateway {
    async fn generate_questions(
        &self,
        _topic: &str,
        count: u32,
    ) -> Result<Vec<QuizQuestion>, GatewayError> {
        Ok(self
            .questions
            .iter()
            .take(count as usize)
            .cloned()
            .collect())
    }

    async fn chat(
        &self,
        history: &[ChatMessage],
        _message: &str,
        language: Language,
    ) -> Result<String, GatewayError> {
        Ok(format!("{} turns, {}", history.len(), language.as_str()))
    }
}

struct FailingGateway;

#[async_trait]
impl AssistantGateway for FailingGateway {
    async fn generate_questions(
        &self,
        _topic: &str,
        _count: u32,
    ) -> Result<Vec<QuizQuestion>, GatewayError> {
        Err(GatewayError::Malformed(
            "response contains no candidate text".to_string(),
        ))
    }

    async fn chat(
        &self,
        _history: &[ChatMessage],
        _message: &str,
        _language: Language,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Api {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

#[tokio::test]
async fn generated_questions_append_without_replacing_existing_entries() {
    let (mut store, _storage) = common::empty_store().await;
    store
        .upsert_question(common::sample_question(1, 0))
        .await
        .unwrap();

    // one generated record collides with the bank's q1
    let mut colliding = common::sample_question(1, 2);
    colliding.question_en = "Generated duplicate".to_string();
    let gateway: Box<dyn AssistantGateway> = Box::new(CannedGateway {
        questions: vec![colliding, common::sample_question(7, 1)],
    });

    let generated = gateway.generate_questions("Elicitation", 5).await.unwrap();
    let added = store.append_questions(generated).await.unwrap();

    assert_eq!(added, 2);
    let questions = store.list_questions();
    assert_eq!(questions.len(), 3);
    // the original q1 is untouched; the colliding record got a fresh id
    assert_eq!(questions[0].question_en, "Question 1");
    let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn failed_generation_leaves_the_bank_untouched() {
    let (mut store, _storage) = common::empty_store().await;
    store
        .upsert_question(common::sample_question(1, 0))
        .await
        .unwrap();

    let gateway: Box<dyn AssistantGateway> = Box::new(FailingGateway);
    let result = gateway.generate_questions("Stakeholders", 5).await;

    assert!(result.is_err());
    assert_eq!(store.list_questions().len(), 1);
}

#[tokio::test]
async fn chat_reply_reflects_history_and_language() {
    let gateway: Box<dyn AssistantGateway> = Box::new(CannedGateway {
        questions: Vec::new(),
    });
    let history = vec![
        ChatMessage::user("What is elicitation?"),
        ChatMessage::model("It is..."),
    ];

    let reply = gateway
        .chat(&history, "Tell me more", Language::En)
        .await
        .unwrap();

    assert_eq!(reply, "2 turns, en");
}
