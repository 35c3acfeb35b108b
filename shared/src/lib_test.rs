use super::*;

fn sample_user() -> User {
    User {
        id: Uuid::nil(),
        username: "erin".into(),
        first_name: "Erin".into(),
        last_name: "Moss".into(),
        avatar_url: None,
    }
}

// =============================================================
// Answer wire shape
// =============================================================

#[test]
fn answer_serializes_expected_keys() {
    let answer = Answer {
        id: Uuid::nil(),
        answer_text: "yes".into(),
        likes: 5,
        dislikes: 2,
        question_id: Uuid::nil(),
        question_text: "really?".into(),
        asked_user: sample_user(),
        asker: None,
        ts: 1_700_000_000_000,
    };
    let value = serde_json::to_value(&answer).unwrap();
    let obj = value.as_object().unwrap();
    for key in ["id", "answer_text", "likes", "dislikes", "question_id", "question_text", "asked_user", "asker", "ts"]
    {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert!(obj["asker"].is_null());
}

#[test]
fn answer_round_trips() {
    let answer = Answer {
        id: Uuid::nil(),
        answer_text: "yes".into(),
        likes: 0,
        dislikes: 0,
        question_id: Uuid::nil(),
        question_text: "really?".into(),
        asked_user: sample_user(),
        asker: Some(sample_user()),
        ts: 42,
    };
    let json = serde_json::to_string(&answer).unwrap();
    let back: Answer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answer);
}

// =============================================================
// Profile flattening
// =============================================================

#[test]
fn user_profile_flattens_user_fields() {
    let profile = UserProfile {
        user: sample_user(),
        self_description: Some("hi".into()),
        date_of_birth: None,
    };
    let value = serde_json::to_value(&profile).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj["username"], "erin");
    assert_eq!(obj["self_description"], "hi");
    assert!(!obj.contains_key("user"));
}

// =============================================================
// Request body defaults
// =============================================================

#[test]
fn signup_names_default_to_empty() {
    let body: SignupRequest = serde_json::from_str(r#"{"username":"erin","password":"hunter2"}"#).unwrap();
    assert_eq!(body.first_name, "");
    assert_eq!(body.last_name, "");
}

#[test]
fn create_question_is_anon_defaults_false() {
    let json = format!(r#"{{"asked_user":"{}","question_text":"hi"}}"#, Uuid::nil());
    let body: CreateQuestionRequest = serde_json::from_str(&json).unwrap();
    assert!(!body.is_anon);
}

#[test]
fn like_patch_parses_total() {
    let body: LikePatch = serde_json::from_str(r#"{"likes":6}"#).unwrap();
    assert_eq!(body.likes, 6);
}

// =============================================================
// Page envelope
// =============================================================

#[test]
fn page_none_cursor_serializes_null() {
    let page: Page<Answer> = Page { items: vec![], next_cursor: None };
    let value = serde_json::to_value(&page).unwrap();
    assert!(value["next_cursor"].is_null());
}

#[test]
fn page_round_trips_cursor() {
    let page: Page<Comment> = Page { items: vec![], next_cursor: Some(99) };
    let json = serde_json::to_string(&page).unwrap();
    let back: Page<Comment> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.next_cursor, Some(99));
}
