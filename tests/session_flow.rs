use fcwmc_quiz::error::SessionError;
use fcwmc_quiz::export::ExportFormat;
use fcwmc_quiz::model::{Filter, SessionPhase, Topic, Transition};
use fcwmc_quiz::session::SessionSettings;
use fcwmc_quiz::{Catalog, QuizSession};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session(exam_mode: bool, timer_seconds: u32) -> QuizSession<'static> {
    QuizSession::with_rng(
        Catalog::embedded(),
        SessionSettings {
            shuffle: false,
            exam_mode,
            timer_seconds,
        },
        StdRng::seed_from_u64(2024),
    )
}

#[test]
fn practice_run_over_one_topic() {
    let mut quiz = session(false, 0);
    assert_eq!(quiz.only_topic(Topic::Qam), Transition::Applied);
    let ids: Vec<u32> = quiz.working_set().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![22, 23, 24]);

    quiz.start();
    assert_eq!(quiz.phase(), SessionPhase::Running);

    // 22: right, 23: wrong, 24: revealed without an answer
    assert_eq!(quiz.select_option(22, 2), Ok(Transition::Applied));
    assert!(quiz.is_revealed(22));
    quiz.go_next();
    quiz.select_option(23, 0).unwrap();
    quiz.go_next();
    assert_eq!(quiz.current_question().map(|q| q.id), Some(24));
    assert_eq!(quiz.reveal(24), Ok(Transition::Applied));
    assert_eq!(quiz.go_next(), Transition::Ignored);

    assert_eq!(quiz.answered_count(), 2);
    assert_eq!(quiz.correct_count(), 1);
    assert!((quiz.progress_fraction() - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(quiz.submit(), Transition::Ignored);

    assert_eq!(
        quiz.select_option(1, 0),
        Err(SessionError::NotInWorkingSet(1))
    );
    assert_eq!(
        quiz.select_option(22, 4),
        Err(SessionError::OptionOutOfRange { index: 4 })
    );

    quiz.reset();
    assert_eq!(quiz.phase(), SessionPhase::NotStarted);
    assert_eq!(quiz.filter_topic(), Filter::Only(Topic::Qam));
    assert_eq!(quiz.answered_count(), 0);
}

#[test]
fn timed_exam_finishes_on_expiry() {
    let mut quiz = session(true, 3);
    quiz.start();
    assert!(quiz.is_timer_armed());

    let first = quiz.current_question().expect("bank is not empty");
    quiz.select_option(first.id, first.correct_index).unwrap();
    assert!(!quiz.is_revealed(first.id));
    assert_eq!(quiz.reveal(first.id), Ok(Transition::Ignored));

    for _ in 0..3 {
        quiz.tick();
    }
    assert_eq!(quiz.phase(), SessionPhase::Finished);
    assert!(!quiz.is_timer_armed());
    assert_eq!(quiz.revealed_ids().len(), 70);
    assert_eq!(quiz.correct_count(), 1);

    // frozen after the run
    assert_eq!(quiz.select_option(first.id, 0), Ok(Transition::Ignored));
    assert_eq!(quiz.response(first.id), Some(first.correct_index));
    assert_eq!(quiz.tick(), Transition::Ignored);
}

#[test]
fn export_ignores_session_filters() {
    let mut quiz = session(false, 0);
    quiz.only_topic(Topic::Qam);
    let json = ExportFormat::Json.render(quiz.catalog()).unwrap();
    let csv = ExportFormat::Csv.render(quiz.catalog()).unwrap();
    assert_eq!(json.matches("\"explanation\"").count(), 70);
    assert_eq!(csv.lines().count(), 71);
}
