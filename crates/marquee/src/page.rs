//! Page session event loop.
//!
//! Single-threaded and cooperative: frame ticks, UI events, and the resolved
//! submission all land on one loop that owns the whole page state. The only
//! suspension point is the in-flight intake request, which is polled here
//! alongside everything else, so the field keeps animating while a
//! submission is on the wire.

use tokio::sync::mpsc;
use tokio::time::{Duration, interval};
use vitrine_common::{ContactForm, SubmissionOutcome, VitrineError};

use crate::config::AppConfig;
use crate::state::PageState;
use crate::submission::InFlight;
use crate::ui::PageUi;

/// One page interaction, as delivered by a driver
#[derive(Debug)]
pub enum PageEvent {
    /// Viewport resized
    Resize { width: f32, height: f32 },
    /// Nav toggle control activated
    NavToggle,
    /// A link inside the nav panel activated
    NavLink,
    /// Contact form submitted
    Submit { form: ContactForm, answer: String },
    /// Close the session
    Shutdown,
}

/// A page session: state plus the surface it mutates
pub struct Page<U: PageUi> {
    state: PageState,
    ui: U,
}

impl<U: PageUi> Page<U> {
    pub fn new(config: AppConfig, ui: U) -> Result<Self, VitrineError> {
        Ok(Self {
            state: PageState::new(config)?,
            ui,
        })
    }

    /// Run until the event source closes or a shutdown event arrives.
    pub async fn run(mut self, mut events: mpsc::Receiver<PageEvent>) {
        let mut frames = interval(Duration::from_millis(
            self.state.config.particles.frame_interval_ms,
        ));

        // First challenge renders as soon as the session starts
        self.state.rotate_challenge(&mut self.ui);

        let mut flight: Option<InFlight> = None;

        loop {
            tokio::select! {
                _ = frames.tick() => {
                    self.state.on_frame();
                }
                outcome = resolved(&mut flight) => {
                    if let Some(done) = flight.take() {
                        self.state.on_submission_resolved(done, outcome, &mut self.ui);
                    }
                }
                event = events.recv() => {
                    match event {
                        Some(PageEvent::Shutdown) | None => break,
                        Some(event) => {
                            if let Some(started) =
                                self.state.on_event(event, flight.is_some(), &mut self.ui)
                            {
                                flight = Some(started);
                            }
                        }
                    }
                }
            }
        }

        tracing::info!("Page session closed");
    }
}

/// Resolves with the in-flight submission's outcome; pends forever while
/// nothing is on the wire.
async fn resolved(flight: &mut Option<InFlight>) -> SubmissionOutcome {
    match flight {
        Some(flight) => flight.outcome().await,
        None => std::future::pending().await,
    }
}
