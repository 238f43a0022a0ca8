use super::Shell;
use crate::i18n;
use anyhow::Result;

impl Shell {
    pub(super) async fn roadmap_view(&mut self) -> Result<()> {
        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);
            let items = self.state.store.list_roadmap();

            println!();
            println!("--- {} ---", t.roadmap);
            for (position, item) in items.iter().enumerate() {
                println!(
                    "{:>2}. {} — {}",
                    position + 1,
                    item.title(language),
                    item.description(language)
                );
            }
            println!("{}", t.roadmap_hint);

            let Some(choice) = self.read_line(">").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "b" | "" => return Ok(()),
                other => {
                    let selected = other
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|idx| items.get(idx));
                    if let Some(item) = selected {
                        println!();
                        println!("## {}", item.title(language));
                        println!("{}", item.content(language));
                    }
                }
            }
        }
    }
}
