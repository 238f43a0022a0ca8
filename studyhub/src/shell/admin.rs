use super::Shell;
use crate::i18n;
use crate::models::{QuizQuestion, RoadmapItem, OPTION_COUNT};
use crate::services::assistant_service::AssistantGateway;
use crate::services::transfer_service;
use anyhow::Result;
use std::path::Path;
use uuid::Uuid;

const DEFAULT_GENERATE_COUNT: u32 = 10;

impl Shell {
    pub(super) async fn admin_view(&mut self) -> Result<()> {
        loop {
            let t = i18n::text(self.state.store.language());

            println!();
            println!("--- {} ---", t.admin);
            println!("[1] {}   [2] {}   [b] {}", t.manage_roadmap, t.manage_questions, t.back);

            let Some(choice) = self.read_line(">").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.manage_roadmap().await?,
                "2" => self.manage_questions().await?,
                "b" | "" => return Ok(()),
                _ => {}
            }
        }
    }

    async fn manage_roadmap(&mut self) -> Result<()> {
        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);

            println!();
            println!("--- {} ---", t.manage_roadmap);
            for item in self.state.store.list_roadmap() {
                println!("  [{}] (#{}) {}", item.id, item.order, item.title(language));
            }
            println!(
                "[a] {}   [e] {}   [d] {}   [i] {}   [x] {}   [b] {}",
                t.add_step, t.edit, t.delete, t.import, t.export, t.back
            );

            let Some(choice) = self.read_line(">").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "a" => self.edit_roadmap_item(None).await?,
                "e" => {
                    let Some(id) = self.read_line(t.enter_id).await? else {
                        return Ok(());
                    };
                    let existing = self
                        .state
                        .store
                        .list_roadmap()
                        .into_iter()
                        .find(|item| item.id == id);
                    match existing {
                        Some(item) => self.edit_roadmap_item(Some(item)).await?,
                        None => println!("{}", t.not_found),
                    }
                }
                "d" => {
                    let Some(id) = self.read_line(t.enter_id).await? else {
                        return Ok(());
                    };
                    if self.confirm_delete().await? {
                        if self.state.store.delete_roadmap_item(&id).await? {
                            println!("{}", t.deleted);
                        } else {
                            println!("{}", t.not_found);
                        }
                    }
                }
                "i" => {
                    let Some(path) = self.read_line(t.enter_path).await? else {
                        return Ok(());
                    };
                    let result =
                        transfer_service::import_roadmap(&mut self.state.store, Path::new(&path))
                            .await;
                    match result {
                        Ok(count) => println!("{} ({})", t.roadmap_imported, count),
                        Err(e) => {
                            tracing::warn!("Roadmap import failed: {:#}", e);
                            println!("{}", t.roadmap_import_failed);
                        }
                    }
                }
                "x" => {
                    let dir = self.state.config.export_dir.clone();
                    let path =
                        transfer_service::export_roadmap(&self.state.store, Path::new(&dir))
                            .await?;
                    println!("{} {}", t.exported_to, path.display());
                }
                "b" | "" => return Ok(()),
                _ => {}
            }
        }
    }

    async fn manage_questions(&mut self) -> Result<()> {
        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);

            println!();
            println!("--- {} ---", t.manage_questions);
            for question in self.state.store.list_questions() {
                println!("  [{}] {}", question.id, question.question(language));
            }
            println!(
                "[a] {}   [e] {}   [d] {}   [i] {}   [x] {}   [g] {}   [b] {}",
                t.add_question, t.edit, t.delete, t.import, t.export, t.generate_ai, t.back
            );

            let Some(choice) = self.read_line(">").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "a" => self.edit_question(None).await?,
                "e" => {
                    let Some(id) = self.read_line(t.enter_id).await? else {
                        return Ok(());
                    };
                    let existing = self
                        .state
                        .store
                        .list_questions()
                        .iter()
                        .find(|question| question.id == id)
                        .cloned();
                    match existing {
                        Some(question) => self.edit_question(Some(question)).await?,
                        None => println!("{}", t.not_found),
                    }
                }
                "d" => {
                    let Some(id) = self.read_line(t.enter_id).await? else {
                        return Ok(());
                    };
                    if self.confirm_delete().await? {
                        if self.state.store.delete_question(&id).await? {
                            println!("{}", t.deleted);
                        } else {
                            println!("{}", t.not_found);
                        }
                    }
                }
                "i" => {
                    let Some(path) = self.read_line(t.enter_path).await? else {
                        return Ok(());
                    };
                    let result =
                        transfer_service::import_questions(&mut self.state.store, Path::new(&path))
                            .await;
                    match result {
                        Ok(count) => println!("{} ({})", t.questions_imported, count),
                        Err(e) => {
                            tracing::warn!("Question import failed: {:#}", e);
                            println!("{}", t.questions_import_failed);
                        }
                    }
                }
                "x" => {
                    let dir = self.state.config.export_dir.clone();
                    let path =
                        transfer_service::export_questions(&self.state.store, Path::new(&dir))
                            .await?;
                    println!("{} {}", t.exported_to, path.display());
                }
                "g" => self.generate_questions().await?,
                "b" | "" => return Ok(()),
                _ => {}
            }
        }
    }

    /// One AI generation round-trip. The call is awaited inline, so a second
    /// request cannot start while one is pending; on failure the bank is
    /// left untouched.
    async fn generate_questions(&mut self) -> Result<()> {
        let t = i18n::text(self.state.store.language());

        if self.state.assistant.is_none() {
            println!("{}", t.assistant_offline);
            return Ok(());
        }

        let Some(topic) = self.read_line(t.enter_topic).await? else {
            return Ok(());
        };
        if topic.is_empty() {
            return Ok(());
        }
        let Some(count_input) = self.read_line(t.enter_count).await? else {
            return Ok(());
        };
        let count = count_input.parse().unwrap_or(DEFAULT_GENERATE_COUNT);

        println!("{}", t.chat_pending);
        let result = match &self.state.assistant {
            Some(assistant) => assistant.generate_questions(&topic, count).await,
            None => return Ok(()),
        };

        match result {
            Ok(questions) => {
                let added = self.state.store.append_questions(questions).await?;
                println!("{} {}", added, t.questions_generated);
            }
            Err(e) => {
                tracing::warn!("Question generation failed: {:#}", e);
                println!("{}", t.generate_failed);
            }
        }
        Ok(())
    }

    async fn edit_roadmap_item(&mut self, existing: Option<RoadmapItem>) -> Result<()> {
        let is_new = existing.is_none();
        let mut item = existing.unwrap_or_else(|| RoadmapItem {
            id: Uuid::new_v4().to_string(),
            title_en: String::new(),
            title_vi: String::new(),
            description_en: String::new(),
            description_vi: String::new(),
            content_en: String::new(),
            content_vi: String::new(),
            order: 0,
        });

        if !is_new {
            println!("{}", i18n::text(self.state.store.language()).keep_current_hint);
        }

        item.title_en = self.prompt_field("Title (EN)", &item.title_en).await?;
        item.title_vi = self.prompt_field("Title (VI)", &item.title_vi).await?;
        item.description_en = self
            .prompt_field("Description (EN)", &item.description_en)
            .await?;
        item.description_vi = self
            .prompt_field("Description (VI)", &item.description_vi)
            .await?;
        item.content_en = self.prompt_field("Content (EN)", &item.content_en).await?;
        item.content_vi = self.prompt_field("Content (VI)", &item.content_vi).await?;

        let order_input = self.prompt_field("Order", &item.order.to_string()).await?;
        item.order = order_input.parse().unwrap_or(item.order);

        let t = i18n::text(self.state.store.language());
        match self.state.store.upsert_roadmap_item(item).await {
            Ok(()) => println!("{}", t.saved),
            Err(e) => {
                tracing::warn!("Roadmap step rejected: {:#}", e);
                println!("{}", t.save_failed);
            }
        }
        Ok(())
    }

    async fn edit_question(&mut self, existing: Option<QuizQuestion>) -> Result<()> {
        let is_new = existing.is_none();
        let mut question = existing.unwrap_or_else(|| QuizQuestion {
            id: Uuid::new_v4().to_string(),
            question_en: String::new(),
            question_vi: String::new(),
            options_en: vec![String::new(); OPTION_COUNT],
            options_vi: vec![String::new(); OPTION_COUNT],
            correct_answer_index: 0,
            explanation_en: String::new(),
            explanation_vi: String::new(),
        });

        if !is_new {
            println!("{}", i18n::text(self.state.store.language()).keep_current_hint);
        }

        question.question_en = self.prompt_field("Question (EN)", &question.question_en).await?;
        question.question_vi = self.prompt_field("Question (VI)", &question.question_vi).await?;
        for index in 0..OPTION_COUNT {
            let current = question.options_en[index].clone();
            question.options_en[index] = self
                .prompt_field(&format!("Option {} (EN)", index + 1), &current)
                .await?;
        }
        for index in 0..OPTION_COUNT {
            let current = question.options_vi[index].clone();
            question.options_vi[index] = self
                .prompt_field(&format!("Option {} (VI)", index + 1), &current)
                .await?;
        }

        let index_input = self
            .prompt_field(
                "Correct answer index (0-3)",
                &question.correct_answer_index.to_string(),
            )
            .await?;
        question.correct_answer_index = index_input
            .parse()
            .ok()
            .filter(|index| *index < OPTION_COUNT)
            .unwrap_or(question.correct_answer_index);

        question.explanation_en = self
            .prompt_field("Explanation (EN)", &question.explanation_en)
            .await?;
        question.explanation_vi = self
            .prompt_field("Explanation (VI)", &question.explanation_vi)
            .await?;

        let t = i18n::text(self.state.store.language());
        match self.state.store.upsert_question(question).await {
            Ok(()) => println!("{}", t.saved),
            Err(e) => {
                tracing::warn!("Question rejected: {:#}", e);
                println!("{}", t.save_failed);
            }
        }
        Ok(())
    }

    /// Prompts for one field; an empty reply keeps the current value.
    async fn prompt_field(&mut self, label: &str, current: &str) -> Result<String> {
        let shown = if current.is_empty() {
            format!("{}:", label)
        } else {
            format!("{} [{}]:", label, current)
        };
        let reply = self.read_line(&shown).await?.unwrap_or_default();
        if reply.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(reply)
        }
    }

    async fn confirm_delete(&mut self) -> Result<bool> {
        let t = i18n::text(self.state.store.language());
        println!("{}", t.confirm_delete);
        let reply = self.read_line(">").await?.unwrap_or_default();
        Ok(reply.eq_ignore_ascii_case("y"))
    }
}
