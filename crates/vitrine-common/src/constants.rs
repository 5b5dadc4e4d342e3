//! Shared constants for Vitrine components.

/// Default intake endpoint for contact submissions
pub const DEFAULT_INTAKE_URL: &str = "https://api.web3forms.com/submit";

/// Subject line attached to every submission
pub const DEFAULT_SUBJECT: &str = "New Submission from Vitrine Website";

/// Label the submit control starts with
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Number of points in the particle field
pub const PARTICLE_COUNT: usize = 50;

/// Maximum distance (surface units) at which two points are connected
pub const CONNECTION_DISTANCE: f32 = 150.0;

/// Stroke width of connection lines
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

/// Particle fill color (neon blue)
pub const PARTICLE_COLOR: &str = "#00f3ff";

/// Viewport width at or below which the nav panel auto-collapses
pub const MOBILE_BREAKPOINT_PX: u32 = 992;

/// Frame interval for the ~60 Hz simulation tick
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Default initial viewport width
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

/// Default initial viewport height
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// On-page status and control messages
pub mod messages {
    /// Shown when the typed answer does not match the current challenge
    pub const CAPTCHA_REJECTED: &str = "Security Breach! Incorrect Captcha. Access Denied.";

    /// Submit control label while a submission is on the wire
    pub const TRANSMITTING_LABEL: &str = "Transmitting Data...";

    /// Shown when the intake endpoint acknowledges with HTTP 200
    pub const DELIVERED: &str = "Transmission Successful. Secure channel established.";

    /// Fallback when a refusal carries no message of its own
    pub const REFUSED_FALLBACK: &str = "Transmission Failed. Connection refused.";

    /// Shown when the request never completes
    pub const SIGNAL_LOST: &str = "Network Error. Signal lost.";
}

/// Inline layout values applied when the nav panel opens over the page flow
pub mod nav_layout {
    /// Offset below the header, px
    pub const TOP_OFFSET_PX: u32 = 80;

    /// Panel padding, px
    pub const PADDING_PX: u32 = 20;

    /// Panel background
    pub const BACKGROUND: &str = "#0a1124";

    /// Bottom border, accent color
    pub const BORDER_BOTTOM: &str = "1px solid #00f3ff";
}
