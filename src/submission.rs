use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{validate, FieldErrors, LeadField, LeadForm, Validation};
use crate::notification_client::{NotificationClient, NotifyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient, page-wide notice about the outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: &'static str,
}

impl Toast {
    pub const DELIVERED: Toast = Toast {
        level: ToastLevel::Success,
        message: "Thank you! We'll be in touch soon.",
    };
    pub const DELIVERY_FAILED: Toast = Toast {
        level: ToastLevel::Error,
        message: "Failed to submit form. Please try again.",
    };
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent; the form keeps its values.
    Invalid(FieldErrors),
    /// The owner was notified and the form was cleared.
    Delivered,
    /// The notification call failed; the form keeps its values.
    DeliveryFailed(NotifyError),
    /// Another submission from this form is still in flight.
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn toast(&self) -> Option<Toast> {
        match self {
            SubmitOutcome::Delivered => Some(Toast::DELIVERED),
            SubmitOutcome::DeliveryFailed(_) => Some(Toast::DELIVERY_FAILED),
            SubmitOutcome::Invalid(_) | SubmitOutcome::AlreadySubmitting => None,
        }
    }
}

/// Drives one contact form: validate, notify the owner once, reflect the result.
///
/// At most one notification is in flight per controller. Edits and submits
/// arriving while one is outstanding are refused.
pub struct SubmissionController<'a> {
    notifier: &'a NotificationClient,
    form: Mutex<LeadForm>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when dropped, whichever way `submit` returns.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<'a> SubmissionController<'a> {
    pub fn new(notifier: &'a NotificationClient) -> Self {
        Self::with_form(notifier, LeadForm::default())
    }

    pub fn with_form(notifier: &'a NotificationClient, form: LeadForm) -> Self {
        Self {
            notifier,
            form: Mutex::new(form),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.in_flight.load(Ordering::Acquire) {
            ControllerState::Submitting
        } else {
            ControllerState::Idle
        }
    }

    /// Snapshot of the current field values.
    pub fn form(&self) -> LeadForm {
        self.lock_form().clone()
    }

    /// Updates one field. Returns `false`, leaving the form untouched, while a
    /// submission is in flight.
    pub fn edit(&self, field: LeadField, value: impl Into<String>) -> bool {
        // checked under the lock: `submit` reads the form through the same lock
        // after raising the flag, so an accepted edit is always part of what it sends
        let mut form = self.lock_form();
        if self.state() == ControllerState::Submitting {
            return false;
        }
        form.set(field, value.into());
        true
    }

    #[tracing::instrument(
        name = "Submit a lead",
        skip(self),
        fields(lead_email = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.try_begin() else {
            tracing::warn!("Ignoring a submit while a previous one is still in flight");
            return SubmitOutcome::AlreadySubmitting;
        };

        let submission = match validate(&self.form()) {
            Validation::Valid(submission) => submission,
            Validation::Invalid(errors) => {
                tracing::info!(%errors, "Lead failed validation");
                return SubmitOutcome::Invalid(errors);
            }
        };
        tracing::Span::current()
            .record("lead_email", &tracing::field::display(&submission.email));

        match self.notifier.notify_owner(&submission.to_notification()).await {
            Ok(()) => {
                *self.lock_form() = LeadForm::default();
                tracing::info!("Lead delivered to the owner");
                SubmitOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to deliver a lead");
                SubmitOutcome::DeliveryFailed(e)
            }
        }
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    // a poisoned lock only means a panic happened mid-edit; the strings are still whole
    fn lock_form(&self) -> MutexGuard<'_, LeadForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
