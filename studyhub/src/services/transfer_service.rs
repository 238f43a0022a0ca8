//! Bulk import/export of roadmap and question collections as bare JSON
//! arrays, the same documents the rest of the ecosystem exchanges: no
//! envelope, no version field.

use crate::models::{QuizQuestion, RoadmapItem};
use crate::services::content_store::{ContentError, ContentStore};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes the roadmap to `itba-roadmap-YYYY-MM-DD.json` in `dir` and returns
/// the path.
pub async fn export_roadmap(store: &ContentStore, dir: &Path) -> Result<PathBuf> {
    write_export(dir, "itba-roadmap", &store.list_roadmap()).await
}

pub async fn export_questions(store: &ContentStore, dir: &Path) -> Result<PathBuf> {
    write_export(dir, "itba-questions", store.list_questions()).await
}

/// Replaces the whole roadmap with the contents of a JSON array file.
/// A payload that is not an array, or contains one invalid record, aborts
/// the import and leaves existing data untouched.
pub async fn import_roadmap(store: &mut ContentStore, path: &Path) -> Result<usize> {
    let items: Vec<RoadmapItem> = read_import(path).await?;
    let count = items.len();
    store.replace_all_roadmap(items).await?;
    Ok(count)
}

pub async fn import_questions(store: &mut ContentStore, path: &Path) -> Result<usize> {
    let questions: Vec<QuizQuestion> = read_import(path).await?;
    let count = questions.len();
    store.replace_all_questions(questions).await?;
    Ok(count)
}

async fn write_export<T: Serialize>(dir: &Path, stem: &str, records: &[T]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .context("Failed to create export directory")?;

    let filename = format!("{}-{}.json", stem, Utc::now().format("%Y-%m-%d"));
    let path = dir.join(filename);

    let json = serde_json::to_string_pretty(records).context("Failed to serialize export")?;
    fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    tracing::info!("Exported {} records to {}", records.len(), path.display());
    Ok(path)
}

async fn read_import<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read import file {}", path.display()))?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| ContentError::InvalidJson(e.to_string()))?;
    let elements = value.as_array().ok_or(ContentError::NotAnArray)?;

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let record: T = serde_json::from_value(element.clone()).map_err(|e| {
            ContentError::InvalidRecord {
                id: format!("#{}", index),
                reason: e.to_string(),
            }
        })?;
        records.push(record);
    }
    Ok(records)
}
