//! Responsive navigation panel toggle.

use vitrine_common::constants::nav_layout;

use crate::ui::PageUi;

/// Inline layout applied when the panel opens over the page flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    /// Links stack vertically
    pub column: bool,
    /// Panel spans the full viewport width
    pub full_width: bool,
    pub top_offset_px: u32,
    pub padding_px: u32,
    pub background: &'static str,
    pub border_bottom: &'static str,
}

impl Default for NavLayout {
    fn default() -> Self {
        Self {
            column: true,
            full_width: true,
            top_offset_px: nav_layout::TOP_OFFSET_PX,
            padding_px: nav_layout::PADDING_PX,
            background: nav_layout::BACKGROUND,
            border_bottom: nav_layout::BORDER_BOTTOM,
        }
    }
}

/// Show/hide state machine for the collapsible links panel
pub struct NavPanel {
    visible: bool,
    breakpoint_px: u32,
    layout: NavLayout,
}

impl NavPanel {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            visible: false,
            breakpoint_px,
            layout: NavLayout::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Toggle control activated
    pub fn toggle(&mut self, ui: &mut impl PageUi) {
        if self.visible {
            self.visible = false;
            ui.hide_nav();
        } else {
            self.visible = true;
            ui.show_nav(&self.layout);
        }
    }

    /// A link inside the panel was activated.
    ///
    /// Narrow viewports collapse the panel so the page behind it is
    /// reachable again; wide viewports keep it as laid out.
    pub fn link_activated(&mut self, viewport_width: f32, ui: &mut impl PageUi) {
        if viewport_width <= self.breakpoint_px as f32 && self.visible {
            self.visible = false;
            ui.hide_nav();
        }
    }
}
