use crate::models::{Language, QuizQuestion, RoadmapItem};
use crate::services::seed;
use crate::services::storage::{PersistedState, StatePersistence};
use anyhow::{Context, Result};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("payload must be a JSON array")]
    NotAnArray,
    #[error("record '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Authoritative holder of roadmap and question data. Constructed once at
/// startup and passed by reference to every consumer; each successful
/// mutation is mirrored to the injected persistence port.
pub struct ContentStore {
    roadmap: Vec<RoadmapItem>,
    questions: Vec<QuizQuestion>,
    language: Language,
    storage: Box<dyn StatePersistence>,
}

impl ContentStore {
    /// Loads the saved state, falling back to the built-in seed content when
    /// nothing usable is stored. A document that parses but violates the
    /// data-model invariants counts as unusable too.
    pub async fn open(storage: Box<dyn StatePersistence>) -> Result<Self> {
        let state = storage
            .load()
            .await
            .context("Failed to load saved state")?
            .filter(|state| match validate_state(state) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Saved state fails validation ({}), ignoring it", e);
                    false
                }
            })
            .unwrap_or_else(|| {
                tracing::info!("No usable saved state, seeding default content");
                PersistedState {
                    roadmap: seed::default_roadmap(),
                    questions: seed::default_questions(),
                    lang: Language::default(),
                }
            });

        let store = Self {
            roadmap: state.roadmap,
            questions: state.questions,
            language: state.lang,
            storage,
        };
        tracing::info!(
            "Content store opened: {} roadmap steps, {} questions, language {}",
            store.roadmap.len(),
            store.questions.len(),
            store.language.as_str()
        );
        Ok(store)
    }

    /// Roadmap steps sorted ascending by display order. Order values need
    /// not be contiguous.
    pub fn list_roadmap(&self) -> Vec<RoadmapItem> {
        let mut items = self.roadmap.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn list_questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub async fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.persist().await
    }

    /// Inserts the item if its id is unknown, otherwise replaces the
    /// existing record in place. Identity is the id, never the reference.
    pub async fn upsert_roadmap_item(&mut self, item: RoadmapItem) -> Result<()> {
        validate_roadmap_item(&item)?;
        let id = item.id.clone();
        match self.roadmap.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => *slot = item,
            None => self.roadmap.push(item),
        }
        self.persist().await?;
        tracing::info!("Roadmap step saved: {}", id);
        Ok(())
    }

    /// Returns whether a record was removed. Items are independent, so there
    /// is nothing to cascade.
    pub async fn delete_roadmap_item(&mut self, id: &str) -> Result<bool> {
        let before = self.roadmap.len();
        self.roadmap.retain(|item| item.id != id);
        if self.roadmap.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        tracing::info!("Roadmap step deleted: {}", id);
        Ok(true)
    }

    pub async fn upsert_question(&mut self, question: QuizQuestion) -> Result<()> {
        validate_question(&question)?;
        let id = question.id.clone();
        match self
            .questions
            .iter_mut()
            .find(|existing| existing.id == question.id)
        {
            Some(slot) => *slot = question,
            None => self.questions.push(question),
        }
        self.persist().await?;
        tracing::info!("Question saved: {}", id);
        Ok(())
    }

    pub async fn delete_question(&mut self, id: &str) -> Result<bool> {
        let before = self.questions.len();
        self.questions.retain(|question| question.id != id);
        if self.questions.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        tracing::info!("Question deleted: {}", id);
        Ok(true)
    }

    /// Bulk import: replaces the whole collection. Every element is checked
    /// first; one invalid record rejects the entire payload so no partial
    /// state is ever admitted.
    pub async fn replace_all_roadmap(&mut self, items: Vec<RoadmapItem>) -> Result<()> {
        for item in &items {
            validate_roadmap_item(item)?;
        }
        check_unique_ids(items.iter().map(|item| item.id.as_str()))?;

        let count = items.len();
        self.roadmap = items;
        self.persist().await?;
        tracing::info!("Roadmap replaced with {} steps", count);
        Ok(())
    }

    pub async fn replace_all_questions(&mut self, questions: Vec<QuizQuestion>) -> Result<()> {
        for question in &questions {
            validate_question(question)?;
        }
        check_unique_ids(questions.iter().map(|question| question.id.as_str()))?;

        let count = questions.len();
        self.questions = questions;
        self.persist().await?;
        tracing::info!("Question bank replaced with {} questions", count);
        Ok(())
    }

    /// AI-generation merge path: appends to the bank, never replacing
    /// existing entries. An incoming id that is already taken gets a fresh
    /// one so bank-wide id uniqueness holds.
    pub async fn append_questions(&mut self, questions: Vec<QuizQuestion>) -> Result<usize> {
        for question in &questions {
            validate_question(question)?;
        }

        let count = questions.len();
        for mut question in questions {
            if self.questions.iter().any(|existing| existing.id == question.id) {
                let minted = Uuid::new_v4().to_string();
                tracing::warn!(
                    "Question id '{}' already in bank, re-minting as {}",
                    question.id,
                    minted
                );
                question.id = minted;
            }
            self.questions.push(question);
        }
        self.persist().await?;
        tracing::info!("Appended {} generated questions to the bank", count);
        Ok(count)
    }

    async fn persist(&self) -> Result<()> {
        let state = PersistedState {
            roadmap: self.roadmap.clone(),
            questions: self.questions.clone(),
            lang: self.language,
        };
        self.storage
            .save(&state)
            .await
            .context("Failed to persist content store")
    }
}

fn validate_state(state: &PersistedState) -> Result<(), ContentError> {
    for item in &state.roadmap {
        validate_roadmap_item(item)?;
    }
    for question in &state.questions {
        validate_question(question)?;
    }
    Ok(())
}

fn validate_roadmap_item(item: &RoadmapItem) -> Result<(), ContentError> {
    item.validate().map_err(|e| ContentError::InvalidRecord {
        id: item.id.clone(),
        reason: e.to_string(),
    })
}

fn validate_question(question: &QuizQuestion) -> Result<(), ContentError> {
    question.validate().map_err(|e| ContentError::InvalidRecord {
        id: question.id.clone(),
        reason: e.to_string(),
    })
}

fn check_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::InvalidRecord {
                id: id.to_string(),
                reason: "duplicate id in payload".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    fn question(id: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question_en: format!("Question {}", id),
            question_vi: format!("Câu hỏi {}", id),
            options_en: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            options_vi: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer_index: 0,
            explanation_en: String::new(),
            explanation_vi: String::new(),
        }
    }

    async fn empty_store() -> (ContentStore, MemoryStorage) {
        let storage = MemoryStorage::with_state(PersistedState::default());
        let store = ContentStore::open(Box::new(storage.clone())).await.unwrap();
        (store, storage)
    }

    #[tokio::test]
    async fn open_without_saved_state_seeds_defaults() {
        let store = ContentStore::open(Box::new(MemoryStorage::new()))
            .await
            .unwrap();
        assert!(!store.list_roadmap().is_empty());
        assert!(!store.list_questions().is_empty());
        assert_eq!(store.language(), Language::Vi);
    }

    #[tokio::test]
    async fn open_with_schema_invalid_saved_state_seeds_defaults() {
        let mut bad = question("bad");
        bad.options_en.pop();
        let storage = MemoryStorage::with_state(PersistedState {
            roadmap: Vec::new(),
            questions: vec![bad],
            lang: Language::En,
        });

        let store = ContentStore::open(Box::new(storage)).await.unwrap();

        assert!(!store.list_roadmap().is_empty());
        assert!(store
            .list_questions()
            .iter()
            .all(|q| q.options_en.len() == 4));
    }

    #[tokio::test]
    async fn upsert_question_replaces_in_place() {
        let (mut store, _storage) = empty_store().await;
        store.upsert_question(question("a")).await.unwrap();
        store.upsert_question(question("b")).await.unwrap();

        let mut updated = question("a");
        updated.question_en = "changed".to_string();
        store.upsert_question(updated).await.unwrap();

        let questions = store.list_questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "a");
        assert_eq!(questions[0].question_en, "changed");
    }

    #[tokio::test]
    async fn replace_all_rejects_invalid_payload_without_mutation() {
        let (mut store, _storage) = empty_store().await;
        store.upsert_question(question("keep")).await.unwrap();

        let mut bad = question("bad");
        bad.correct_answer_index = 9;
        let result = store.replace_all_questions(vec![question("x"), bad]).await;

        assert!(result.is_err());
        assert_eq!(store.list_questions().len(), 1);
        assert_eq!(store.list_questions()[0].id, "keep");
    }

    #[tokio::test]
    async fn append_remints_colliding_ids() {
        let (mut store, _storage) = empty_store().await;
        store.upsert_question(question("q1")).await.unwrap();

        store
            .append_questions(vec![question("q1"), question("q2")])
            .await
            .unwrap();

        let questions = store.list_questions();
        assert_eq!(questions.len(), 3);
        let mut ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3, "ids must stay unique after append");
    }

    #[tokio::test]
    async fn mutations_write_through_to_storage() {
        let (mut store, storage) = empty_store().await;
        store.upsert_question(question("persisted")).await.unwrap();

        let saved = storage.snapshot().expect("state must be saved");
        assert_eq!(saved.questions.len(), 1);
        assert_eq!(saved.questions[0].id, "persisted");
    }
}
