use super::{option_index, Shell};
use crate::i18n;
use crate::services::quiz_service::{QuizSession, SessionState};
use anyhow::Result;

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

impl Shell {
    /// Drives one quiz session: selection → submission → feedback → advance
    /// until finished. Entering the view always starts a fresh session over
    /// a snapshot of the current bank.
    pub(super) async fn quiz_view(&mut self) -> Result<()> {
        let bank = self.state.store.list_questions().to_vec();
        let mut session = QuizSession::start(&bank);

        loop {
            let language = self.state.store.language();
            let t = i18n::text(language);

            match session.state() {
                SessionState::Empty => {
                    println!();
                    println!("{}", t.no_questions);
                    return Ok(());
                }
                SessionState::Finished => {
                    println!();
                    println!("*** {} ***", t.quiz_finished);
                    println!("{}: {}/{}", t.your_score, session.score(), session.total());
                    println!("{}   [x] {}", t.new_session, t.back);

                    let Some(choice) = self.read_line(">").await? else {
                        return Ok(());
                    };
                    match choice.as_str() {
                        "r" => session = QuizSession::start(&bank),
                        "x" | "b" | "" => return Ok(()),
                        _ => {}
                    }
                }
                SessionState::InProgress => {
                    let Some(question) = session.current_question() else {
                        return Ok(());
                    };

                    println!();
                    println!(
                        "{}: {}/{}",
                        t.progress,
                        session.cursor() + 1,
                        session.total()
                    );
                    println!("{}", question.question(language));
                    let options = question.options(language).iter().enumerate();
                    for ((index, option), letter) in options.zip(OPTION_LETTERS) {
                        let marker = if session.selected() == Some(index) {
                            ">"
                        } else {
                            " "
                        };
                        println!(" {}{}) {}", marker, letter, option);
                    }

                    if !session.is_submitted() {
                        println!("{}", t.select_hint);
                        let Some(choice) = self.read_line(">").await? else {
                            return Ok(());
                        };
                        if choice == "x" {
                            return Ok(());
                        } else if choice == "s" {
                            session.submit();
                        } else if let Some(index) = option_index(&choice) {
                            session.select_option(index);
                        }
                    } else {
                        let correct = session.answered_correctly().unwrap_or(false);
                        println!();
                        println!("{}", if correct { t.correct } else { t.incorrect });
                        if !correct {
                            println!(
                                "{}: {}",
                                t.correct_answer,
                                question.correct_option(language)
                            );
                        }
                        println!();
                        println!("[{}]", t.explanation);
                        println!("{}", question.explanation(language));

                        let last = session.cursor() + 1 == session.total();
                        println!();
                        println!(
                            "[n] {}   [x] {}",
                            if last { t.finish } else { t.next },
                            t.back
                        );
                        let Some(choice) = self.read_line(">").await? else {
                            return Ok(());
                        };
                        match choice.as_str() {
                            "n" | "" => session.advance(),
                            "x" => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}
