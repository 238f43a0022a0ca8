#![allow(dead_code)]

use studyhub::models::{QuizQuestion, RoadmapItem};
use studyhub::services::content_store::ContentStore;
use studyhub::services::storage::{MemoryStorage, PersistedState};

pub fn sample_question(n: usize, correct: usize) -> QuizQuestion {
    QuizQuestion {
        id: format!("q{}", n),
        question_en: format!("Question {}", n),
        question_vi: format!("Câu hỏi {}", n),
        options_en: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        options_vi: vec![
            "Phương án A".to_string(),
            "Phương án B".to_string(),
            "Phương án C".to_string(),
            "Phương án D".to_string(),
        ],
        correct_answer_index: correct,
        explanation_en: format!("Explanation {}", n),
        explanation_vi: format!("Giải thích {}", n),
    }
}

pub fn sample_bank(n: usize) -> Vec<QuizQuestion> {
    (0..n).map(|i| sample_question(i, i % 4)).collect()
}

pub fn sample_roadmap_item(n: usize, order: i32) -> RoadmapItem {
    RoadmapItem {
        id: format!("step-{}", n),
        title_en: format!("Step {}", n),
        title_vi: format!("Bước {}", n),
        description_en: format!("Description {}", n),
        description_vi: format!("Mô tả {}", n),
        content_en: format!("Content {}", n),
        content_vi: format!("Nội dung {}", n),
        order,
    }
}

/// Store starting from an explicitly empty saved state (no seed content),
/// plus a storage handle for observing what gets persisted.
pub async fn empty_store() -> (ContentStore, MemoryStorage) {
    let storage = MemoryStorage::with_state(PersistedState::default());
    let store = ContentStore::open(Box::new(storage.clone()))
        .await
        .expect("Failed to open test content store");
    (store, storage)
}
