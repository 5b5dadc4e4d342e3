//! Page surface seam.
//!
//! The behavior layer talks to the page through this trait so the engine can
//! run headless against the console and be exercised in tests.

use vitrine_common::StatusKind;

use crate::nav::NavLayout;

/// Mutations the behavior layer applies to the page
pub trait PageUi {
    /// Replace the challenge question text
    fn set_challenge_question(&mut self, text: &str);

    /// Replace the form status line
    fn set_status(&mut self, kind: StatusKind, text: &str);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Replace the submit control label
    fn set_submit_label(&mut self, label: &str);

    /// Current submit control label
    fn submit_label(&self) -> String;

    /// Clear every form field
    fn reset_form(&mut self);

    /// Clear only the challenge answer field
    fn clear_answer_field(&mut self);

    /// Show the nav panel with the given inline layout
    fn show_nav(&mut self, layout: &NavLayout);

    /// Hide the nav panel
    fn hide_nav(&mut self);
}

/// Console-backed page surface for headless runs
pub struct ConsoleUi {
    submit_enabled: bool,
    submit_label: String,
}

impl ConsoleUi {
    pub fn new(submit_label: &str) -> Self {
        Self {
            submit_enabled: true,
            submit_label: submit_label.to_string(),
        }
    }
}

impl PageUi for ConsoleUi {
    fn set_challenge_question(&mut self, text: &str) {
        tracing::info!(question = %text, "Challenge updated");
    }

    fn set_status(&mut self, kind: StatusKind, text: &str) {
        match kind {
            StatusKind::Success => tracing::info!(status = %text, "Form status"),
            StatusKind::Error => tracing::warn!(status = %text, "Form status"),
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
        tracing::debug!(enabled, "Submit control toggled");
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
        tracing::debug!(label = %label, "Submit label changed");
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn reset_form(&mut self) {
        tracing::info!("Form fields cleared");
    }

    fn clear_answer_field(&mut self) {
        tracing::debug!("Answer field cleared");
    }

    fn show_nav(&mut self, layout: &NavLayout) {
        tracing::info!(
            top_offset_px = layout.top_offset_px,
            background = %layout.background,
            "Nav panel shown"
        );
    }

    fn hide_nav(&mut self) {
        tracing::info!("Nav panel hidden");
    }
}

/// Test double that records every page mutation.
#[cfg(test)]
pub struct RecordingUi {
    pub question: String,
    pub question_updates: usize,
    pub statuses: Vec<(StatusKind, String)>,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub form_resets: usize,
    pub answer_clears: usize,
    pub nav_visible: bool,
    pub nav_layout: Option<NavLayout>,
    pub nav_hides: usize,
}

#[cfg(test)]
impl RecordingUi {
    pub fn new() -> Self {
        Self {
            question: String::new(),
            question_updates: 0,
            statuses: Vec::new(),
            submit_enabled: true,
            submit_label: "Send Message".to_string(),
            form_resets: 0,
            answer_clears: 0,
            nav_visible: false,
            nav_layout: None,
            nav_hides: 0,
        }
    }

    pub fn last_status(&self) -> Option<&(StatusKind, String)> {
        self.statuses.last()
    }
}

#[cfg(test)]
impl PageUi for RecordingUi {
    fn set_challenge_question(&mut self, text: &str) {
        self.question = text.to_string();
        self.question_updates += 1;
    }

    fn set_status(&mut self, kind: StatusKind, text: &str) {
        self.statuses.push((kind, text.to_string()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }

    fn clear_answer_field(&mut self) {
        self.answer_clears += 1;
    }

    fn show_nav(&mut self, layout: &NavLayout) {
        self.nav_visible = true;
        self.nav_layout = Some(layout.clone());
    }

    fn hide_nav(&mut self) {
        self.nav_visible = false;
        self.nav_hides += 1;
    }
}
