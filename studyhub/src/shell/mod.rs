//! Terminal presentation layer: tab navigation, language toggle, rendering.
//! Pure view code; all domain behavior lives in the service modules.

mod admin;
mod chat;
mod quiz;
mod roadmap;

use crate::i18n;
use crate::services::AppState;
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Shell {
    state: AppState,
    input: Lines<BufReader<Stdin>>,
}

pub async fn run(state: AppState) -> Result<()> {
    Shell::new(state).main_loop().await
}

impl Shell {
    fn new(state: AppState) -> Self {
        Self {
            state,
            input: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Reads one trimmed line. None means stdin closed, which every loop
    /// treats as "back"/"quit".
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{} ", prompt);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let line = self
            .input
            .next_line()
            .await
            .context("Failed to read from stdin")?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    async fn main_loop(&mut self) -> Result<()> {
        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);

            println!();
            println!("=== {} ===", t.app_title);
            println!("[1] {}   [2] {}   [3] {}   [4] {}", t.roadmap, t.quiz, t.admin, t.chat);
            println!("[l] {}   [q] {}", t.language_toggle, t.quit);

            let Some(choice) = self.read_line(">").await? else {
                break;
            };
            match choice.as_str() {
                "1" => self.roadmap_view().await?,
                "2" => self.quiz_view().await?,
                "3" => self.admin_view().await?,
                "4" => self.chat_view().await?,
                "l" => {
                    let next = language.toggled();
                    self.state.store.set_language(next).await?;
                }
                "q" => break,
                _ => {}
            }
        }

        tracing::info!("Shell closed");
        Ok(())
    }
}

/// Maps an answer letter (a-d, case-insensitive) to an option index.
fn option_index(input: &str) -> Option<usize> {
    match input.to_lowercase().as_str() {
        "a" => Some(0),
        "b" => Some(1),
        "c" => Some(2),
        "d" => Some(3),
        _ => None,
    }
}
