//! Drawing surface seam and the SVG frame renderer.

/// Receiver for one frame's draw calls.
pub trait DrawSurface {
    /// Wipe the previous frame
    fn clear(&mut self);

    /// Filled disc for a single point
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);

    /// Connection line with an opacity in [0, 1]
    #[allow(clippy::too_many_arguments)]
    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &str,
        opacity: f32,
        width: f32,
    );
}

/// Renders the current frame into a standalone SVG document.
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Resize the surface, discarding the current frame
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    /// The current frame as a complete SVG document
    pub fn document(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        svg.push_str(r##"<rect width="100%" height="100%" fill="#05070f"/>"##);
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.body.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            x, y, radius, color
        ));
    }

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &str,
        opacity: f32,
        width: f32,
    ) {
        self.body.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, color, opacity, width
        ));
    }
}

/// Test surface that records draw calls instead of rendering them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    /// (x, y, radius)
    pub circles: Vec<(f32, f32, f32)>,
    /// (x1, y1, x2, y2, opacity)
    pub lines: Vec<(f32, f32, f32, f32, f32)>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, _color: &str) {
        self.circles.push((x, y, radius));
    }

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        _color: &str,
        opacity: f32,
        _width: f32,
    ) {
        self.lines.push((x1, y1, x2, y2, opacity));
    }
}
