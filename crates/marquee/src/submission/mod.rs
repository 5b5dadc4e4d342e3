//! Contact submission gating and relay.
//!
//! One attempt walks `idle → validating → {rejected, transmitting} →
//! {succeeded, failed} → idle`. Validation happens locally against the
//! current challenge; only a matching answer puts a request on the wire, and
//! the submit control is restored on every terminal path.

mod intake;

pub use intake::IntakeClient;

use std::future::Future;
use std::pin::Pin;

use vitrine_common::constants::messages;
use vitrine_common::{Challenge, ContactForm, StatusKind, SubmissionOutcome, SubmissionPayload};

use crate::ui::PageUi;

/// A submission currently on the wire
pub struct InFlight {
    outcome: Pin<Box<dyn Future<Output = SubmissionOutcome>>>,
    saved_label: String,
}

impl InFlight {
    /// Poll handle for the event loop
    pub fn outcome(&mut self) -> Pin<&mut dyn Future<Output = SubmissionOutcome>> {
        self.outcome.as_mut()
    }
}

/// Gates and relays contact form submissions
pub struct SubmissionController {
    intake: IntakeClient,
    access_key: String,
    subject: String,
}

impl SubmissionController {
    pub fn new(intake: IntakeClient, access_key: String, subject: String) -> Self {
        Self {
            intake,
            access_key,
            subject,
        }
    }

    /// Validate the typed answer and, when it matches, start a transmission.
    ///
    /// Returns None on rejection; the caller rotates the challenge so the
    /// old answer stops being accepted.
    pub fn begin(
        &self,
        challenge: &Challenge,
        form: &ContactForm,
        typed_answer: &str,
        ui: &mut impl PageUi,
    ) -> Option<InFlight> {
        if !challenge.accepts(typed_answer) {
            tracing::info!("Challenge answer rejected");
            ui.set_status(StatusKind::Error, messages::CAPTCHA_REJECTED);
            ui.clear_answer_field();
            return None;
        }

        let saved_label = ui.submit_label();
        ui.set_submit_enabled(false);
        ui.set_submit_label(messages::TRANSMITTING_LABEL);

        let payload = SubmissionPayload::new(form, &self.access_key, &self.subject);
        tracing::info!(name = %payload.name, endpoint = %self.intake.endpoint(), "Transmitting submission");

        let intake = self.intake.clone();
        let outcome = Box::pin(async move { intake.dispatch(payload).await });

        Some(InFlight {
            outcome,
            saved_label,
        })
    }

    /// Apply a terminal outcome to the page.
    ///
    /// Returns true when the submission succeeded so the caller can rotate
    /// the challenge. Control restoration runs as a drop finalizer on every
    /// exit path.
    pub fn finish(
        &self,
        flight: InFlight,
        outcome: SubmissionOutcome,
        ui: &mut impl PageUi,
    ) -> bool {
        let mut restore = RestoreSubmit {
            ui,
            label: flight.saved_label,
        };

        match outcome {
            SubmissionOutcome::Delivered => {
                restore.ui().set_status(StatusKind::Success, messages::DELIVERED);
                restore.ui().reset_form();
                true
            }
            SubmissionOutcome::Refused { message } => {
                let text = message.as_deref().unwrap_or(messages::REFUSED_FALLBACK);
                restore.ui().set_status(StatusKind::Error, text);
                false
            }
            SubmissionOutcome::TransportFailed => {
                restore
                    .ui()
                    .set_status(StatusKind::Error, messages::SIGNAL_LOST);
                false
            }
        }
    }
}

/// Restores the submit control when dropped, whatever path was taken.
struct RestoreSubmit<'a, U: PageUi> {
    ui: &'a mut U,
    label: String,
}

impl<U: PageUi> RestoreSubmit<'_, U> {
    fn ui(&mut self) -> &mut U {
        self.ui
    }
}

impl<U: PageUi> Drop for RestoreSubmit<'_, U> {
    fn drop(&mut self) {
        self.ui.set_submit_enabled(true);
        self.ui.set_submit_label(&self.label);
    }
}
