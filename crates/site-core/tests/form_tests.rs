use site_core::{
    counter_tier, email_is_valid, validate, CounterTier, Field, FieldErrorKind, FormFlow,
    FormPhase, FormValues,
};

fn values(name: &str, email: &str, message: &str) -> FormValues {
    FormValues {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

#[test]
fn collects_all_field_errors() {
    let errs = validate(&values("", "x", "hi")).unwrap_err();
    assert_eq!(errs.len(), 2);
    assert!(errs
        .iter()
        .any(|e| e.field == Field::Name && e.kind == FieldErrorKind::Required));
    assert!(errs
        .iter()
        .any(|e| e.field == Field::Email && e.kind == FieldErrorKind::InvalidEmail));
}

#[test]
fn empty_everything_reports_three_errors() {
    let errs = validate(&values("", "", "")).unwrap_err();
    assert_eq!(errs.len(), 3);
    assert!(errs
        .iter()
        .all(|e| e.kind == FieldErrorKind::Required));
}

#[test]
fn valid_input_passes() {
    assert!(validate(&values("Ana", "a@b.com", "hello")).is_ok());
}

#[test]
fn whitespace_only_fields_are_required_errors() {
    let errs = validate(&values("  ", "a@b.com", "\t")).unwrap_err();
    assert_eq!(errs.len(), 2);
}

#[test]
fn email_shape() {
    assert!(email_is_valid("a@b.com"));
    assert!(email_is_valid("first.last@sub.domain.org"));
    assert!(!email_is_valid("x"));
    assert!(!email_is_valid("a@b"));
    assert!(!email_is_valid("@b.com"));
    assert!(!email_is_valid("a@.com"));
    assert!(!email_is_valid("a@b."));
    assert!(!email_is_valid("a b@c.com"));
    assert!(!email_is_valid("a@@b.com"));
}

#[test]
fn happy_path_transitions() {
    let mut flow = FormFlow::new();
    assert_eq!(flow.phase(), FormPhase::Idle);
    assert!(flow.phase().can_submit());

    assert!(flow.begin_validation());
    assert!(flow.begin_send());
    assert!(!flow.phase().can_submit());
    assert!(flow.sent_ok());
    assert_eq!(flow.phase(), FormPhase::Success);
    assert!(!flow.phase().can_submit());
    assert!(flow.reverted());
    assert_eq!(flow.phase(), FormPhase::Idle);
}

#[test]
fn validation_failure_returns_to_idle() {
    let mut flow = FormFlow::new();
    assert!(flow.begin_validation());
    assert!(flow.validation_failed());
    assert_eq!(flow.phase(), FormPhase::Idle);
}

#[test]
fn error_path_reverts_and_blocks_resubmit_meanwhile() {
    let mut flow = FormFlow::new();
    flow.begin_validation();
    flow.begin_send();
    assert!(flow.sent_err());
    assert_eq!(flow.phase(), FormPhase::Error);
    // Double-submit while the error banner is showing is rejected.
    assert!(!flow.begin_validation());
    assert!(flow.reverted());
    assert!(flow.begin_validation());
}

#[test]
fn illegal_transitions_are_ignored() {
    let mut flow = FormFlow::new();
    assert!(!flow.sent_ok());
    assert!(!flow.reverted());
    assert_eq!(flow.phase(), FormPhase::Idle);
}

#[test]
fn counter_tiers() {
    assert_eq!(counter_tier(0), CounterTier::Normal);
    assert_eq!(counter_tier(450), CounterTier::Normal);
    assert_eq!(counter_tier(451), CounterTier::Warn);
    assert_eq!(counter_tier(500), CounterTier::Warn);
    assert_eq!(counter_tier(501), CounterTier::Over);
}
