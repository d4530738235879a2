use validated_input::config::FieldConfig;
use validated_input::state::{PresentationState, Validity};

fn config(value: &str) -> FieldConfig {
    FieldConfig::new("Field", value)
        .empty_message("empty")
        .error_message("error")
}

#[test]
fn test_initial_uses_empty_message() {
    let state = PresentationState::initial(&config("abc"));
    assert_eq!(state.validity, Validity::Unknown);
    assert_eq!(state.error_message, "empty");
    assert_eq!(state.current_value, "abc");
    assert!(!state.is_empty());
}

#[test]
fn test_is_empty_tracks_value() {
    let cfg = config("");
    let state = PresentationState::initial(&cfg);
    for value in ["", " ", "a", ""] {
        let next = state.changed(value, None, &cfg);
        assert_eq!(next.is_empty(), value.is_empty());
    }
}

#[test]
fn test_changed_without_verdict_keeps_validity() {
    let cfg = config("");
    let state = PresentationState::initial(&cfg).validated(false, &cfg);
    let next = state.changed("x", None, &cfg);
    assert_eq!(next.validity, Validity::Invalid);
    assert_eq!(next.error_message, "empty");
}

#[test]
fn test_changed_failure_message() {
    let cfg = config("");
    let state = PresentationState::initial(&cfg);
    assert_eq!(state.changed("", Some(false), &cfg).error_message, "empty");
    assert_eq!(state.changed("x", Some(false), &cfg).error_message, "error");
}

#[test]
fn test_transitions_leave_original_untouched() {
    let cfg = config("");
    let state = PresentationState::initial(&cfg);
    let _ = state.changed("x", Some(true), &cfg);
    assert_eq!(state, PresentationState::initial(&cfg));
}

#[test]
fn test_validated_success_clears_message() {
    let cfg = config("ok");
    let state = PresentationState::initial(&cfg).validated(true, &cfg);
    assert_eq!(state.validity, Validity::Valid);
    assert_eq!(state.error_message, "");
}

#[test]
fn test_classes_per_validity() {
    let cfg = config("");
    let unknown = PresentationState::initial(&cfg);
    let valid = unknown.validated(true, &cfg);
    let invalid = unknown.validated(false, &cfg);

    assert_eq!(unknown.container_class(), "form-group");
    assert_eq!(valid.container_class(), "form-group has-success");
    assert_eq!(invalid.container_class(), "form-group has-error");

    assert_eq!(unknown.help_class(), "help-block hidden");
    assert_eq!(valid.help_class(), "help-block hidden");
    assert_eq!(invalid.help_class(), "help-block");
}

#[test]
fn test_synced_only_moves_value() {
    let cfg = config("");
    let state = PresentationState::initial(&cfg).validated(false, &cfg);
    let next = state.synced("new");
    assert_eq!(next.current_value, "new");
    assert_eq!(next.validity, state.validity);
    assert_eq!(next.error_message, state.error_message);
}

#[test]
fn test_validity_helpers() {
    assert_eq!(Validity::from_verdict(true), Validity::Valid);
    assert_eq!(Validity::from_verdict(false), Validity::Invalid);
}
