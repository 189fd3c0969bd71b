//! Lifecycle transitions: rounds, answering, mode toggling, restart.

use lexiquest_foundation::{ErrorKind, GameMode};
use lexiquest_session::{Feedback, SessionStatus};

use crate::{answer_correctly, answer_incorrectly, session};

#[test]
fn progress_steps_by_ten_until_terminal() {
    let mut session = session(1);

    for expected in (10..=100).step_by(10) {
        answer_incorrectly(&mut session);
        assert_eq!(session.progress(), expected);
        session.advance().unwrap();
    }

    assert_eq!(session.status(), SessionStatus::Terminal);
    assert_eq!(session.rounds_played(), 10);
}

#[test]
fn correctness_does_not_change_the_game_length() {
    let mut session = session(2);

    for i in 0..10 {
        if i % 2 == 0 {
            answer_correctly(&mut session);
        } else {
            answer_incorrectly(&mut session);
        }
        session.advance().unwrap();
    }

    assert!(session.is_over());
    assert_eq!(session.score(), 5);
}

#[test]
fn feedback_reports_the_missed_answer() {
    let mut session = session(3);
    let expected = session.current_round().unwrap().correct_option.clone();

    let feedback = session.submit_answer("wrong").unwrap();
    match feedback {
        Feedback::Incorrect { correct_answer, .. } => assert_eq!(correct_answer, expected),
        Feedback::Correct => panic!("a wrong answer was graded correct"),
    }
}

#[test]
fn answered_rounds_reject_a_second_grade() {
    let mut session = session(4);
    answer_correctly(&mut session);

    let err = session.submit_answer("again").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoundAlreadyAnswered));
}

#[test]
fn toggling_mode_affects_only_future_rounds() {
    let mut session = session(5);
    let current = session.current_round().unwrap().correct_option.clone();

    session.toggle_mode().unwrap();
    assert_eq!(session.mode(), GameMode::WordMatch);
    assert_eq!(session.current_round().unwrap().correct_option, current);

    session.advance().unwrap();
    let round = session.current_round().unwrap();
    assert_eq!(round.correct_option, round.target.word);
}

#[test]
fn restart_is_valid_from_the_terminal_state() {
    let mut session = session(6);
    for _ in 0..10 {
        answer_incorrectly(&mut session);
        session.advance().unwrap();
    }
    assert!(session.is_over());

    session.restart().unwrap();
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.score(), 0);
    assert_eq!(session.progress(), 0);
    assert_eq!(session.level(), 1);
    assert!(session.current_round().is_some());
}

#[test]
fn restart_is_valid_mid_game() {
    let mut session = session(7);
    answer_correctly(&mut session);
    session.advance().unwrap();

    session.restart().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.progress(), 0);
}

#[test]
fn terminal_state_only_allows_restart() {
    let mut session = session(8);
    for _ in 0..10 {
        answer_incorrectly(&mut session);
        session.advance().unwrap();
    }

    assert!(matches!(
        session.start().unwrap_err().kind,
        ErrorKind::GameOver
    ));
    assert!(matches!(
        session.submit_answer("x").unwrap_err().kind,
        ErrorKind::GameOver
    ));
    assert!(matches!(
        session.toggle_mode().unwrap_err().kind,
        ErrorKind::GameOver
    ));
    assert!(!session.advance().unwrap());
}

#[test]
fn final_report_summarizes_the_game() {
    let mut session = session(9);
    for _ in 0..10 {
        answer_correctly(&mut session);
        session.advance().unwrap();
    }

    let report = session.final_report().unwrap();
    assert_eq!(report.score, 10);
    assert_eq!(report.rounds, 10);
    assert_eq!(format!("{report}"), format!("final score 10/10, reached level {}", report.level));
}
