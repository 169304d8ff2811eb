use super::*;
use shared::protocol::{CategoryListPayload, QuestionBatchPayload, RawCategory, RawQuestion};

const BASE: &str = "https://opentdb.com/api.php";

fn category_reply() -> BridgeReply {
    BridgeReply::Category(CategoryListPayload {
        trivia_categories: vec![RawCategory {
            id: 21,
            name: "Sports".to_string(),
        }],
    })
}

fn questions_reply() -> BridgeReply {
    BridgeReply::Questions(QuestionBatchPayload {
        response_code: 0,
        results: vec![RawQuestion {
            category: "Sports".to_string(),
            kind: "multiple".to_string(),
            difficulty: "easy".to_string(),
            question: "Which team won?".to_string(),
            correct_answer: "A".to_string(),
            incorrect_answers: vec!["B".to_string(), "C".to_string(), "D".to_string()],
        }],
    })
}

fn interactive_session() -> Session {
    let mut session = Session::new(BASE);
    let request = session.start();
    assert_eq!(request, BridgeRequest::Category);
    assert_eq!(
        session.handle_reply(category_reply()),
        SessionEvent::CategoriesLoaded { count: 1 }
    );
    session
}

#[test]
fn start_requests_the_category_list() {
    let mut session = Session::new(BASE);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.start(), BridgeRequest::Category);
    assert_eq!(session.phase(), SessionPhase::AwaitingCategories);
}

#[test]
fn category_reply_stores_mapped_categories_and_unlocks_the_session() {
    let session = interactive_session();
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.categories().len(), 1);
    assert_eq!(session.categories()[0].name, "Sports");
    assert_eq!(session.categories()[0].data, 21);
}

#[test]
fn questions_reply_before_categories_is_ignored() {
    let mut session = Session::new(BASE);
    session.start();
    assert_eq!(session.handle_reply(questions_reply()), SessionEvent::Ignored);
    assert_eq!(session.phase(), SessionPhase::AwaitingCategories);
}

#[test]
fn submit_builds_the_question_request() {
    let mut session = interactive_session();
    let raw = RawParameters {
        number: Some("5".to_string()),
        category: Some(9),
        difficulty: Some("easy".to_string()),
        kind: Some("multiple".to_string()),
    };
    let outcome = session.submit(&raw);
    assert_eq!(
        outcome,
        SubmitOutcome::Fetch(BridgeRequest::Questions {
            url: "https://opentdb.com/api.php?amount=5&category=9&difficulty=easy&type=multiple"
                .to_string(),
        })
    );
    assert_eq!(session.phase(), SessionPhase::AwaitingQuestions);
}

#[test]
fn invalid_count_rejects_with_the_fixed_notification_and_ends_the_session() {
    let mut session = interactive_session();
    let raw = RawParameters {
        number: Some("abc".to_string()),
        ..Default::default()
    };
    let outcome = session.submit(&raw);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            notification: PARAMETER_NOTIFICATION.to_string(),
        }
    );
    assert_eq!(session.phase(), SessionPhase::Done);
}

#[test]
fn submit_outside_the_interactive_phase_is_ignored() {
    let mut session = Session::new(BASE);
    session.start();
    let outcome = session.submit(&RawParameters::default());
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(session.phase(), SessionPhase::AwaitingCategories);
}

#[test]
fn questions_reply_completes_and_terminates_the_session() {
    let mut session = interactive_session();
    session.submit(&RawParameters::default());

    let event = session.handle_reply(questions_reply());
    let SessionEvent::Completed(response) = event else {
        panic!("expected completion");
    };
    assert_eq!(response.response_code, 0);
    assert_eq!(response.results[0].correct_answer, "A");
    assert_eq!(session.phase(), SessionPhase::Done);
}

#[test]
fn termination_is_idempotent() {
    let mut session = interactive_session();
    session.submit(&RawParameters::default());
    session.handle_reply(questions_reply());
    assert_eq!(session.phase(), SessionPhase::Done);

    // A second payload after Done changes nothing.
    assert_eq!(session.handle_reply(questions_reply()), SessionEvent::Ignored);
    assert_eq!(session.handle_reply(category_reply()), SessionEvent::Ignored);
    assert_eq!(session.phase(), SessionPhase::Done);
}
