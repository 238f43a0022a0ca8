use studyhub::services::quiz_service::{QuizSession, SessionState, SESSION_SIZE};

mod common;

#[test]
fn session_draws_a_subset_without_duplicates() {
    let bank = common::sample_bank(12);
    let session = QuizSession::start(&bank);

    assert_eq!(session.total(), SESSION_SIZE);

    let mut seen = std::collections::HashSet::new();
    let mut session = session;
    while session.state() == SessionState::InProgress {
        let question = session.current_question().unwrap().clone();
        assert!(
            bank.iter().any(|q| q.id == question.id),
            "drawn question must come from the bank"
        );
        assert!(seen.insert(question.id), "no question may be drawn twice");

        session.select_option(0);
        session.submit();
        session.advance();
    }
    assert_eq!(seen.len(), SESSION_SIZE);
}

#[test]
fn empty_bank_reports_no_questions_available() {
    let session = QuizSession::start(&[]);
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.current_question().is_none());
    assert_eq!(session.total(), 0);
}

#[test]
fn bank_of_two_yields_a_session_of_two() {
    let bank = common::sample_bank(2);
    let session = QuizSession::start(&bank);
    assert_eq!(session.total(), 2);
}

#[test]
fn answering_alternate_questions_scores_three_of_five() {
    let bank = common::sample_bank(5);
    let mut session = QuizSession::start(&bank);

    // questions 1, 3, 5 answered correctly; 2 and 4 incorrectly
    for position in 0..5 {
        let correct = session.current_question().unwrap().correct_answer_index;
        if position % 2 == 0 {
            session.select_option(correct);
        } else {
            session.select_option((correct + 1) % 4);
        }
        session.submit();
        session.advance();
    }

    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.score(), 3);
    assert_eq!(session.total(), 5);
}

#[test]
fn finished_score_stays_within_bounds() {
    let bank = common::sample_bank(4);
    let mut session = QuizSession::start(&bank);
    while session.state() == SessionState::InProgress {
        session.select_option(1);
        session.submit();
        session.advance();
    }
    assert!(session.score() as usize <= session.total());
}

#[test]
fn restart_always_resets_score_and_cursor() {
    let bank = common::sample_bank(3);
    let mut session = QuizSession::start(&bank);

    let correct = session.current_question().unwrap().correct_answer_index;
    session.select_option(correct);
    session.submit();
    assert_eq!(session.score(), 1);

    session = QuizSession::start(&bank);
    assert_eq!(session.score(), 0);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.state(), SessionState::InProgress);
}
