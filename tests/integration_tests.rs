// Integration tests for Insight Quiz

use insight_quiz::core::{default_catalog, Quiz, QuizSession, QuizState, Recommender, StepOutcome};
use insight_quiz::models::Resource;
use std::collections::HashSet;

fn run_quiz(quiz: &Quiz, tags: &[&str]) -> QuizSession {
    let mut session = QuizSession::new();
    session.start(quiz).unwrap();
    for (index, tag) in tags.iter().enumerate() {
        session.select(quiz, index, tag).unwrap();
    }
    session
}

fn assert_partition(quiz: &Quiz, session: &QuizSession) {
    let results = session.results(quiz);

    let names: Vec<&str> = results.ranked().map(|s| s.resource.name.as_str()).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    let catalog: HashSet<&str> = quiz.catalog().iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names.len(), quiz.catalog().len(), "Partition sizes must sum to catalog size");
    assert_eq!(unique, catalog, "Partition must cover the catalog without duplicates");
}

#[test]
fn test_integration_end_to_end_quiz() {
    let quiz = Quiz::default();
    let mut session = QuizSession::new();
    session.start(&quiz).unwrap();

    let tags = ["hands-on", "career", "wind", "paid"];
    let mut completed = None;
    for (index, tag) in tags.iter().enumerate() {
        match session.select(&quiz, index, tag).unwrap() {
            StepOutcome::Next { question } => assert_eq!(question, index + 1),
            StepOutcome::Completed(results) => completed = Some(results),
            StepOutcome::Revised { .. } => panic!("No answer was revised"),
        }
    }

    let results = completed.expect("Last answer should complete the quiz");
    assert_eq!(session.state(), QuizState::Completed);
    assert_eq!(results.top[0].resource.name, "Global Wind Organisation Training");
    assert_eq!(results.top[0].percentage, 100);
    assert_eq!(results.top.len(), 3);
    assert!(results.has_others());

    // Ranked by score
    let scores: Vec<usize> = results.ranked().map(|s| s.score).collect();
    for i in 1..scores.len() {
        assert!(scores[i - 1] >= scores[i], "Results not sorted by score");
    }
}

#[test]
fn test_percentage_range_for_all_answer_paths() {
    let quiz = Quiz::default();
    let first = &quiz.questions()[0];
    let second = &quiz.questions()[1];

    for a in &first.options {
        for b in &second.options {
            let mut session = QuizSession::new();
            session.start(&quiz).unwrap();
            session.select(&quiz, 0, &a.tag).unwrap();
            session.select(&quiz, 1, &b.tag).unwrap();

            let results = session.results(&quiz);
            for scored in results.ranked() {
                assert!(scored.percentage <= 100);
                assert!(scored.score <= 2);
            }
            assert_partition(&quiz, &session);
        }
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let quiz = Quiz::default();
    let session = run_quiz(&quiz, &["reading"]);
    let results = session.results(&quiz);

    let catalog_positions: Vec<usize> = results
        .ranked()
        .map(|s| {
            quiz.catalog()
                .iter()
                .position(|r| r.name == s.resource.name)
                .unwrap()
        })
        .collect();

    let scores: Vec<usize> = results.ranked().map(|s| s.score).collect();
    for i in 1..scores.len() {
        if scores[i - 1] == scores[i] {
            assert!(catalog_positions[i - 1] < catalog_positions[i]);
        }
    }
}

#[test]
fn test_reset_then_results_are_zero() {
    let quiz = Quiz::default();
    let mut session = run_quiz(&quiz, &["visual", "home", "solar", "free"]);
    assert_eq!(session.state(), QuizState::Completed);

    session.reset(&quiz);

    let results = session.results(&quiz);
    assert!(results.ranked().all(|s| s.percentage == 0));
    assert_eq!(results.len(), default_catalog().len());
    assert_partition(&quiz, &session);
}

#[test]
fn test_custom_top_n() {
    let quiz = Quiz::builtin(Recommender::new(5));
    let session = run_quiz(&quiz, &["visual"]);
    let results = session.results(&quiz);

    assert_eq!(results.top.len(), 5);
    assert_eq!(results.others.len(), quiz.catalog().len() - 5);
}

#[test]
fn test_small_catalog_has_no_others() {
    let catalog = vec![
        Resource::new("Only", "https://example.org/only", &["solar"], "Free"),
    ];
    let quiz = Quiz::new(insight_quiz::core::default_questions(), catalog, Recommender::default());
    let session = run_quiz(&quiz, &["visual", "home", "solar", "free"]);
    let results = session.results(&quiz);

    assert_eq!(results.top.len(), 1);
    assert_eq!(results.top[0].percentage, 25);
    assert!(!results.has_others());
}
