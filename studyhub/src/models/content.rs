use serde::{Deserialize, Serialize};
use validator::Validate;

/// Every question carries exactly this many answer options per language.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Vi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }
}

/// One step of the learning roadmap. Field names round-trip the camelCase
/// JSON documents produced by export and accepted by import.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    pub title_en: String,
    pub title_vi: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_vi: String,
    #[serde(default)]
    pub content_en: String,
    #[serde(default)]
    pub content_vi: String,
    #[serde(default)]
    pub order: i32,
}

impl RoadmapItem {
    pub fn title(&self, language: Language) -> &str {
        match language {
            Language::En => &self.title_en,
            Language::Vi => &self.title_vi,
        }
    }

    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::En => &self.description_en,
            Language::Vi => &self.description_vi,
        }
    }

    pub fn content(&self, language: Language) -> &str {
        match language {
            Language::En => &self.content_en,
            Language::Vi => &self.content_vi,
        }
    }
}

/// A multiple-choice question. The English and Vietnamese option arrays are
/// index-aligned: option i in one language is the translation of option i in
/// the other, so `correct_answer_index` applies to both.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question_en: String,
    pub question_vi: String,
    #[validate(length(equal = 4, message = "exactly 4 English options required"))]
    pub options_en: Vec<String>,
    #[validate(length(equal = 4, message = "exactly 4 Vietnamese options required"))]
    pub options_vi: Vec<String>,
    #[validate(range(max = 3, message = "correct answer index must be between 0 and 3"))]
    pub correct_answer_index: usize,
    #[serde(default)]
    pub explanation_en: String,
    #[serde(default)]
    pub explanation_vi: String,
}

impl QuizQuestion {
    pub fn question(&self, language: Language) -> &str {
        match language {
            Language::En => &self.question_en,
            Language::Vi => &self.question_vi,
        }
    }

    pub fn options(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.options_en,
            Language::Vi => &self.options_vi,
        }
    }

    pub fn explanation(&self, language: Language) -> &str {
        match language {
            Language::En => &self.explanation_en,
            Language::Vi => &self.explanation_vi,
        }
    }

    pub fn correct_option(&self, language: Language) -> &str {
        &self.options(language)[self.correct_answer_index]
    }
}
