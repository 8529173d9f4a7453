use scribe::domain::InferenceState;

#[test]
fn given_pending_state_when_checking_transitions_then_running_and_failed_are_allowed() {
    assert!(InferenceState::Pending.can_transition_to(InferenceState::Running));
    assert!(InferenceState::Pending.can_transition_to(InferenceState::Failed));
    assert!(!InferenceState::Pending.can_transition_to(InferenceState::Succeeded));
}

#[test]
fn given_running_state_when_checking_transitions_then_only_terminal_states_follow() {
    assert!(InferenceState::Running.can_transition_to(InferenceState::Succeeded));
    assert!(InferenceState::Running.can_transition_to(InferenceState::Failed));
    assert!(!InferenceState::Running.can_transition_to(InferenceState::Pending));
}

#[test]
fn given_terminal_states_when_checking_transitions_then_nothing_follows() {
    for terminal in [InferenceState::Succeeded, InferenceState::Failed] {
        assert!(terminal.is_terminal());
        assert!(!terminal.can_transition_to(InferenceState::Running));
        assert!(!terminal.can_transition_to(InferenceState::Failed));
    }
}

#[test]
fn given_state_when_displayed_then_uppercase_name_is_used() {
    assert_eq!(InferenceState::Running.to_string(), "RUNNING");
    assert_eq!(InferenceState::Failed.as_str(), "FAILED");
}
