use super::*;
use crate::services::answer::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[test]
fn answer_error_maps_not_found() {
    let err = AnswerError::NotFound(Uuid::nil());
    assert_eq!(answer_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn answer_error_maps_question_not_found() {
    let err = AnswerError::QuestionNotFound(Uuid::nil());
    assert_eq!(answer_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn answer_error_maps_forbidden() {
    assert_eq!(answer_error_to_status(&AnswerError::Forbidden), StatusCode::FORBIDDEN);
}

#[test]
fn answer_error_maps_already_answered_to_conflict() {
    assert_eq!(answer_error_to_status(&AnswerError::AlreadyAnswered), StatusCode::CONFLICT);
}

#[test]
fn page_query_converts_to_params() {
    let query = PageQuery { cursor: Some("123".into()), page_size: Some("7".into()) };
    let params = query.params();
    assert_eq!(params.cursor, Some(123));
    assert_eq!(params.page_size, 7);
}

#[test]
fn page_query_empty_uses_defaults() {
    let query = PageQuery { cursor: None, page_size: None };
    let params = query.params();
    assert_eq!(params.cursor, None);
    assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
    assert!(params.page_size <= MAX_PAGE_SIZE);
}
