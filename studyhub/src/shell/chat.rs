use super::Shell;
use crate::i18n;
use crate::models::ChatMessage;
use crate::services::assistant_service::AssistantGateway;
use anyhow::Result;

impl Shell {
    /// Chat transcript loop. Each request is awaited before the next prompt
    /// is shown, so there is never more than one in-flight call and replies
    /// cannot arrive out of order. A failed call appends a visible error
    /// entry to the transcript and nothing else.
    pub(super) async fn chat_view(&mut self) -> Result<()> {
        let t = i18n::text(self.state.store.language());

        if self.state.assistant.is_none() {
            println!();
            println!("{}", t.assistant_offline);
            return Ok(());
        }

        println!();
        println!("--- {} ---", t.chat);
        println!("{}", t.chat_intro);

        let mut transcript: Vec<ChatMessage> = Vec::new();
        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);

            let Some(line) = self.read_line(&format!("{}>", t.chat_prompt)).await? else {
                return Ok(());
            };
            if line.is_empty() || line == "/back" {
                return Ok(());
            }

            println!("{}", t.chat_pending);
            let reply = match &self.state.assistant {
                Some(assistant) => assistant.chat(&transcript, &line, language).await,
                None => return Ok(()),
            };

            transcript.push(ChatMessage::user(line));
            match reply {
                Ok(text) => {
                    println!();
                    println!("{}", text);
                    transcript.push(ChatMessage::model(text));
                }
                Err(e) => {
                    tracing::warn!("Chat request failed: {:#}", e);
                    println!("{}", t.chat_failed);
                    transcript.push(ChatMessage::model(t.chat_failed));
                }
            }
        }
    }
}
