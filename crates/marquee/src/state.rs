//! Page session state.
//!
//! One `PageState` owns everything a page load owns: the particle field and
//! its surface, the current challenge, the nav panel, and the submission
//! controller. It is owned and driven exclusively by the event loop, so no
//! locking is involved anywhere.

use vitrine_common::{Challenge, ContactForm, SubmissionOutcome, VitrineError};

use crate::challenge::ChallengeGenerator;
use crate::config::AppConfig;
use crate::nav::NavPanel;
use crate::page::PageEvent;
use crate::particles::{ParticleField, SvgSurface};
use crate::submission::{InFlight, IntakeClient, SubmissionController};
use crate::ui::PageUi;

/// Everything one page session owns
pub struct PageState {
    pub config: AppConfig,
    generator: ChallengeGenerator,
    challenge: Challenge,
    field: ParticleField,
    surface: SvgSurface,
    nav: NavPanel,
    controller: SubmissionController,
    viewport_width: f32,
}

impl PageState {
    pub fn new(config: AppConfig) -> Result<Self, VitrineError> {
        let intake = IntakeClient::new(&config.intake.endpoint)?;
        let controller = SubmissionController::new(
            intake,
            config.intake.access_key.clone(),
            config.intake.subject.clone(),
        );

        let generator = ChallengeGenerator::new();
        let challenge = generator.generate();

        let field = ParticleField::new(
            config.viewport.width,
            config.viewport.height,
            config.particles.count,
            config.particles.connection_distance,
        );
        let surface = SvgSurface::new(config.viewport.width, config.viewport.height);
        let nav = NavPanel::new(config.viewport.mobile_breakpoint_px);
        let viewport_width = config.viewport.width;

        Ok(Self {
            config,
            generator,
            challenge,
            field,
            surface,
            nav,
            controller,
            viewport_width,
        })
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Swap in a fresh challenge and render its question.
    ///
    /// Question text and stored answer are replaced together, so they can
    /// never drift apart.
    pub fn rotate_challenge(&mut self, ui: &mut impl PageUi) {
        self.challenge = self.generator.generate();
        ui.set_challenge_question(&self.challenge.question);
    }

    /// Advance the particle field one frame.
    pub fn on_frame(&mut self) {
        self.field.step(&mut self.surface);

        if let Some(path) = &self.config.particles.snapshot_path {
            if self.field.frame() % self.config.particles.snapshot_every_frames == 0 {
                if let Err(err) = std::fs::write(path, self.surface.document()) {
                    tracing::warn!(error = %err, "Failed to write field snapshot");
                }
            }
        }
    }

    /// Dispatch one UI event. Returns a started transmission, if any.
    pub fn on_event(
        &mut self,
        event: PageEvent,
        in_flight: bool,
        ui: &mut impl PageUi,
    ) -> Option<InFlight> {
        match event {
            PageEvent::Resize { width, height } => {
                self.viewport_width = width;
                self.surface.resize(width, height);
                self.field.resize(width, height);
                None
            }
            PageEvent::NavToggle => {
                self.nav.toggle(ui);
                None
            }
            PageEvent::NavLink => {
                self.nav.link_activated(self.viewport_width, ui);
                None
            }
            PageEvent::Submit { form, answer } => {
                if in_flight {
                    // Control is disabled while transmitting
                    tracing::debug!("Submission already in flight, ignoring");
                    return None;
                }
                self.on_submit(form, &answer, ui)
            }
            // The event loop intercepts shutdown before dispatching
            PageEvent::Shutdown => None,
        }
    }

    fn on_submit(
        &mut self,
        form: ContactForm,
        answer: &str,
        ui: &mut impl PageUi,
    ) -> Option<InFlight> {
        match self.controller.begin(&self.challenge, &form, answer, ui) {
            Some(flight) => Some(flight),
            None => {
                // Rejected: the old answer must stop being accepted
                self.rotate_challenge(ui);
                None
            }
        }
    }

    /// Apply a resolved transmission to the page.
    pub fn on_submission_resolved(
        &mut self,
        flight: InFlight,
        outcome: SubmissionOutcome,
        ui: &mut impl PageUi,
    ) {
        if self.controller.finish(flight, outcome, ui) {
            self.rotate_challenge(ui);
        }
    }

    #[cfg(test)]
    pub fn set_challenge(&mut self, challenge: Challenge) {
        self.challenge = challenge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RecordingUi;
    use vitrine_common::Operator;

    fn state() -> PageState {
        PageState::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_resize_regenerates_field_and_tracks_width() {
        let mut state = state();
        let mut ui = RecordingUi::new();

        let started = state.on_event(
            PageEvent::Resize {
                width: 500.0,
                height: 400.0,
            },
            false,
            &mut ui,
        );
        assert!(started.is_none());
        assert_eq!(state.field().points().len(), 50);
        assert_eq!(state.field().size(), (500.0, 400.0));
        for p in state.field().points() {
            assert!((0.0..500.0).contains(&p.x));
            assert!((0.0..400.0).contains(&p.y));
        }
    }

    #[test]
    fn test_nav_link_uses_current_viewport_width() {
        let mut state = state();
        let mut ui = RecordingUi::new();

        state.on_event(PageEvent::NavToggle, false, &mut ui);
        assert!(ui.nav_visible);

        state.on_event(
            PageEvent::Resize {
                width: 993.0,
                height: 700.0,
            },
            false,
            &mut ui,
        );
        state.on_event(PageEvent::NavLink, false, &mut ui);
        assert!(ui.nav_visible, "wide viewport keeps the panel open");

        state.on_event(
            PageEvent::Resize {
                width: 992.0,
                height: 700.0,
            },
            false,
            &mut ui,
        );
        state.on_event(PageEvent::NavLink, false, &mut ui);
        assert!(!ui.nav_visible, "narrow viewport collapses the panel");
    }

    #[test]
    fn test_rejection_rotates_challenge() {
        let mut state = state();
        let mut ui = RecordingUi::new();

        state.set_challenge(Challenge::from_operands(Operator::Add, 3, 4));
        let started = state.on_event(
            PageEvent::Submit {
                form: ContactForm::default(),
                answer: "8".to_string(),
            },
            false,
            &mut ui,
        );

        assert!(started.is_none());
        assert_eq!(ui.question_updates, 1);
        assert_eq!(ui.question, state.challenge().question);
        assert!(
            state.challenge().accepts(&state.challenge().answer.to_string()),
            "rotated challenge accepts its own answer"
        );
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut state = state();
        let mut ui = RecordingUi::new();

        state.set_challenge(Challenge::from_operands(Operator::Add, 3, 4));
        let started = state.on_event(
            PageEvent::Submit {
                form: ContactForm::default(),
                answer: "7".to_string(),
            },
            true,
            &mut ui,
        );

        assert!(started.is_none());
        assert!(ui.statuses.is_empty());
        assert!(ui.submit_enabled);
    }

    #[test]
    fn test_frame_steps_the_field() {
        let mut state = state();
        state.on_frame();
        state.on_frame();
        assert_eq!(state.field().frame(), 2);
    }
}
