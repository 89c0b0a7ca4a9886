//! Scenario tests for the shared application state.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::models::{FormResponse, FormSubmission, PollVote, QuestionSpec, QuestionType};
use crate::{AppError, AppState, Config, SequentialIds};

/// Test fixture with deterministic identifiers.
struct TestFixture {
    state: AppState,
}

impl TestFixture {
    fn new() -> Self {
        Self {
            state: AppState::with_id_generator(Arc::new(SequentialIds::new("t")), false),
        }
    }
}

#[test]
fn test_favorite_color_scenario() {
    let fixture = TestFixture::new();
    let mut polls = fixture.state.polls.write();

    let poll = polls.create_poll("Favorite color?", &["Red", "Blue"]);
    assert_eq!(poll.options.len(), 2);
    assert!(poll.options.iter().all(|o| o.votes == 0));
    assert_eq!(poll.total_votes, 0);

    polls.submit_response(&poll.id, 1).unwrap();

    let poll = polls.get_poll(&poll.id).unwrap();
    assert_eq!(poll.options[0].text, "Red");
    assert_eq!(poll.options[0].votes, 0);
    assert_eq!(poll.options[1].text, "Blue");
    assert_eq!(poll.options[1].votes, 1);
    assert_eq!(poll.total_votes, 1);
}

#[test]
fn test_feedback_scenario() {
    let fixture = TestFixture::new();
    let mut forms = fixture.state.forms.write();

    let form = forms.create_form(
        "Feedback",
        vec![QuestionSpec::new(QuestionType::Short, "Name").required()],
    );
    assert_eq!(form.questions.len(), 1);
    assert!(!form.questions[0].id.is_empty());
    assert!(form.responses.is_empty());

    let question_id = form.questions[0].id.clone();
    forms
        .submit_form_response(FormSubmission {
            form_id: form.id.clone(),
            responses: vec![FormResponse::new(&question_id, "Alice")],
        })
        .unwrap();

    let form = forms.get_form(&form.id).unwrap();
    assert_eq!(
        form.responses,
        vec![vec![FormResponse::new(&question_id, "Alice")]]
    );
}

#[test]
fn test_unknown_ids_leave_state_unchanged() {
    let fixture = TestFixture::new();
    fixture.state.polls.write().create_poll("Q", &["A"]);
    fixture.state.forms.write().create_form("F", Vec::new());
    let before = serde_json::to_value(fixture.state.snapshot().polls).unwrap();
    let revision = fixture.state.revision_id();

    let vote = fixture.state.polls.write().submit_response("nonexistent", 0).map(|_| ());
    assert!(matches!(vote, Err(AppError::NotFound(_))));

    let submit = fixture
        .state
        .forms
        .write()
        .submit_form_response(FormSubmission {
            form_id: "nonexistent".to_string(),
            responses: Vec::new(),
        })
        .map(|_| ());
    assert!(matches!(submit, Err(AppError::NotFound(_))));

    let snapshot = fixture.state.snapshot();
    assert_eq!(serde_json::to_value(snapshot.polls).unwrap(), before);
    assert!(snapshot.forms[0].responses.is_empty());
    assert_eq!(fixture.state.revision_id(), revision);
}

#[test]
fn test_revision_counts_successful_mutations() {
    let fixture = TestFixture::new();
    assert_eq!(fixture.state.revision_id(), 0);

    let poll = fixture.state.polls.write().create_poll("Q", &["A", "B"]);
    let form = fixture.state.forms.write().create_form("F", Vec::new());
    assert_eq!(fixture.state.revision_id(), 2);

    fixture.state.polls.write().submit_response(&poll.id, 0).unwrap();
    let _ = fixture.state.polls.write().submit_response(&poll.id, 9);
    fixture
        .state
        .forms
        .write()
        .submit_form_response(FormSubmission {
            form_id: form.id,
            responses: Vec::new(),
        })
        .unwrap();

    assert_eq!(fixture.state.revision_id(), 4);
    fixture.state.view.write().toggle();
    assert_eq!(fixture.state.revision_id(), 4);
}

#[test]
fn test_snapshot_shape() {
    let fixture = TestFixture::new();
    let poll = fixture.state.polls.write().create_poll("Q", &["A"]);
    fixture
        .state
        .polls
        .write()
        .cast_vote(&PollVote {
            poll_id: poll.id.clone(),
            option_id: poll.options[0].id.clone(),
        })
        .unwrap();
    fixture.state.forms.write().create_form(
        "F",
        vec![QuestionSpec::new(QuestionType::Long, "Comments").with_placeholder("...")],
    );
    fixture.state.view.write().toggle();

    let body: Value = serde_json::from_str(&fixture.state.snapshot_json().unwrap()).unwrap();

    assert_eq!(body["schemaVersion"], 1);
    assert_eq!(body["revisionId"], 3);
    assert_eq!(body["isCompactView"], true);
    assert!(body["generatedAt"].is_string());
    assert_eq!(
        body["polls"][0],
        json!({
            "id": "t-1",
            "question": "Q",
            "options": [{ "id": "t-2", "text": "A", "votes": 1 }],
            "totalVotes": 1
        })
    );
    assert_eq!(
        body["forms"][0],
        json!({
            "id": "t-3",
            "title": "F",
            "questions": [{
                "id": "t-4",
                "type": "long",
                "text": "Comments",
                "required": false,
                "placeholder": "..."
            }],
            "responses": []
        })
    );
}

#[test]
fn test_state_from_config() {
    let config = Config {
        compact_view: true,
        id_prefix: Some("cfg".to_string()),
        ..Config::default()
    };
    let state = AppState::new(&config);

    assert!(state.view.read().is_compact_view());
    let poll = state.polls.write().create_poll("Q", &["A"]);
    assert_eq!(poll.id, "cfg-1");

    let random = AppState::default().polls.write().create_poll("Q", &["A"]);
    assert!(uuid::Uuid::parse_str(&random.id).is_ok());
}

#[test]
fn test_clones_share_stores() {
    let fixture = TestFixture::new();
    let other = fixture.state.clone();

    let poll = fixture.state.polls.write().create_poll("Q", &["A"]);
    other.polls.write().submit_response(&poll.id, 0).unwrap();

    assert_eq!(
        fixture.state.polls.read().get_poll(&poll.id).unwrap().total_votes,
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_votes_keep_totals_consistent() {
    let fixture = TestFixture::new();
    let poll = fixture
        .state
        .polls
        .write()
        .create_poll("Q", &["A", "B", "C"]);

    let mut handles = Vec::new();
    for worker in 0..8usize {
        let state = fixture.state.clone();
        let poll_id = poll.id.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50usize {
                let _ = state.polls.write().submit_response(&poll_id, (worker + i) % 4);
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let polls = fixture.state.polls.read();
    let poll = polls.get_poll(&poll.id).unwrap();
    let sum: u64 = poll.options.iter().map(|o| o.votes).sum();
    assert_eq!(poll.total_votes, sum);
    // index 3 is out of range and rejected a quarter of the time
    assert_eq!(poll.total_votes, 300);
}
