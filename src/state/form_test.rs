use super::*;

#[test]
fn begin_clears_previous_result() {
    let mut state = FormState {
        result: Some(FormResult::ServerError("old".to_owned())),
        pending: false,
    };
    assert!(state.begin());
    assert!(state.pending);
    assert!(state.result.is_none());
}

#[test]
fn begin_rejects_overlapping_submission() {
    let mut state = FormState::default();
    assert!(state.begin());
    assert!(!state.begin());
}

#[test]
fn finish_stores_result_and_clears_pending() {
    let mut state = FormState::default();
    state.begin();
    state.finish(FormResult::Message("No access token found".to_owned()));
    assert!(!state.pending);
    assert_eq!(state.form_error().as_deref(), Some("No access token found"));
    assert!(state.field_errors("name").is_empty());
}

#[test]
fn success_message_passes_through() {
    let mut state = FormState::default();
    state.finish(FormResult::success_with("sent"));
    assert_eq!(state.success_message().as_deref(), Some("sent"));
    assert_eq!(state.form_error(), None);
}
