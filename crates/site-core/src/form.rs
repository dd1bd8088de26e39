//! Contact form state machine and validation.
//!
//! Validation collects every failing field instead of stopping at the
//! first, so each invalid input can be annotated inline. The phase
//! machine enforces idle → validating → (sending → success | sending →
//! error | back to idle on validation failure); both terminal phases
//! revert to idle after a fixed display delay.

use crate::constants::{MESSAGE_MAX_CHARS, MESSAGE_WARN_FRACTION};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Sending,
    Success,
    Error,
}

impl FormPhase {
    /// Submission is only accepted from idle; success/error windows
    /// keep the control disabled to prevent duplicate sends.
    #[inline]
    pub fn can_submit(self) -> bool {
        matches!(self, FormPhase::Idle)
    }
}

/// Phase holder with transition checking. Illegal transitions are
/// ignored and logged rather than panicking; the form is cosmetic and
/// must never take the page down.
#[derive(Default, Debug)]
pub struct FormFlow {
    phase: FormPhase,
}

impl FormFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn begin_validation(&mut self) -> bool {
        self.step(FormPhase::Idle, FormPhase::Validating)
    }

    pub fn validation_failed(&mut self) -> bool {
        self.step(FormPhase::Validating, FormPhase::Idle)
    }

    pub fn begin_send(&mut self) -> bool {
        self.step(FormPhase::Validating, FormPhase::Sending)
    }

    pub fn sent_ok(&mut self) -> bool {
        self.step(FormPhase::Sending, FormPhase::Success)
    }

    pub fn sent_err(&mut self) -> bool {
        self.step(FormPhase::Sending, FormPhase::Error)
    }

    /// Delayed revert from either terminal phase.
    pub fn reverted(&mut self) -> bool {
        match self.phase {
            FormPhase::Success | FormPhase::Error => {
                self.phase = FormPhase::Idle;
                true
            }
            _ => {
                log::warn!("form: revert from {:?} ignored", self.phase);
                false
            }
        }
    }

    fn step(&mut self, from: FormPhase, to: FormPhase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            log::warn!("form: {:?} -> {:?} ignored in {:?}", from, to, self.phase);
            false
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum FieldErrorKind {
    #[error("This field is required")]
    Required,
    #[error("Invalid email format")]
    InvalidEmail,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

pub type FieldErrors = SmallVec<[FieldError; 4]>;

/// Check every field; all failures are reported together.
pub fn validate(values: &FormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if values.name.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            kind: FieldErrorKind::Required,
        });
    }
    let email = values.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            kind: FieldErrorKind::Required,
        });
    } else if !email_is_valid(email) {
        errors.push(FieldError {
            field: Field::Email,
            kind: FieldErrorKind::InvalidEmail,
        });
    }
    if values.message.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Message,
            kind: FieldErrorKind::Required,
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `local@domain.tld` shape: one `@`, non-empty local part, domain with
/// a dot splitting non-empty labels, no whitespace anywhere.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Styling tier for the live message-length counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CounterTier {
    Normal,
    Warn,
    Over,
}

#[inline]
pub fn counter_tier(len: usize) -> CounterTier {
    if len > MESSAGE_MAX_CHARS {
        CounterTier::Over
    } else if len as f32 > MESSAGE_MAX_CHARS as f32 * MESSAGE_WARN_FRACTION {
        CounterTier::Warn
    } else {
        CounterTier::Normal
    }
}
