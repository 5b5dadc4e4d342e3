//! Particle field background simulation.
//!
//! A fixed batch of drifting points with proximity connection lines,
//! re-rendered every frame. The pairwise check is O(n²), which is fine at
//! 50 points; a spatial grid would be needed well before a few hundred.

mod surface;

pub use surface::{DrawSurface, SvgSurface};

use rand::Rng;
use vitrine_common::constants::{CONNECTION_LINE_WIDTH, PARTICLE_COLOR};

/// A single simulated point
#[derive(Debug, Clone)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Point {
    fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.random::<f32>() * width,
            y: rng.random::<f32>() * height,
            vx: rng.random::<f32>() - 0.5,
            vy: rng.random::<f32>() - 0.5,
            radius: rng.random::<f32>() * 2.0 + 1.0,
        }
    }

    /// Advance one tick, reflecting off the field edges
    fn advance(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// The particle field simulation
pub struct ParticleField {
    width: f32,
    height: f32,
    count: usize,
    connection_distance: f32,
    points: Vec<Point>,
    frame: u64,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize, connection_distance: f32) -> Self {
        let mut field = Self {
            width,
            height,
            count,
            connection_distance,
            points: Vec::new(),
            frame: 0,
        };
        field.spawn_points();
        field
    }

    /// Resize the field and regenerate every point.
    ///
    /// Simulation state is not preserved across a resize; the field visibly
    /// restarts.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.spawn_points();
        tracing::debug!(width = %width, height = %height, "Particle field resized");
    }

    fn spawn_points(&mut self) {
        let mut rng = rand::rng();
        self.points = (0..self.count)
            .map(|_| Point::spawn(&mut rng, self.width, self.height))
            .collect();
    }

    /// Advance the simulation one frame and draw it.
    pub fn step<S: DrawSurface>(&mut self, surface: &mut S) {
        surface.clear();
        self.frame += 1;

        for point in &mut self.points {
            point.advance(self.width, self.height);
        }

        for point in &self.points {
            surface.fill_circle(point.x, point.y, point.radius, PARTICLE_COLOR);
        }

        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let a = &self.points[i];
                let b = &self.points[j];
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < self.connection_distance {
                    let opacity = 1.0 - dist / self.connection_distance;
                    surface.stroke_line(
                        a.x,
                        a.y,
                        b.x,
                        b.y,
                        PARTICLE_COLOR,
                        opacity,
                        CONNECTION_LINE_WIDTH,
                    );
                }
            }
        }
    }

    /// Frames stepped since creation
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[cfg(test)]
    fn place(&mut self, points: Vec<Point>) {
        self.points = points;
    }
}

#[cfg(test)]
mod tests {
    use super::surface::RecordingSurface;
    use super::*;

    fn point_at(x: f32, y: f32, vx: f32, vy: f32) -> Point {
        Point {
            x,
            y,
            vx,
            vy,
            radius: 1.5,
        }
    }

    #[test]
    fn test_spawn_fills_bounds() {
        let field = ParticleField::new(800.0, 600.0, 50, 150.0);
        assert_eq!(field.points().len(), 50);
        for p in field.points() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((-0.5..0.5).contains(&p.vx));
            assert!((-0.5..0.5).contains(&p.vy));
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn test_resize_regenerates_all_points() {
        let mut field = ParticleField::new(800.0, 600.0, 50, 150.0);
        field.resize(320.0, 240.0);

        assert_eq!(field.points().len(), 50);
        assert_eq!(field.size(), (320.0, 240.0));
        for p in field.points() {
            assert!((0.0..320.0).contains(&p.x));
            assert!((0.0..240.0).contains(&p.y));
        }
    }

    #[test]
    fn test_edge_contact_reflects_velocity() {
        let mut field = ParticleField::new(100.0, 100.0, 1, 150.0);
        field.place(vec![
            point_at(99.9, 50.0, 0.4, 0.0),
            point_at(50.0, 0.05, 0.0, -0.4),
        ]);

        let mut surface = RecordingSurface::default();
        field.step(&mut surface);

        assert!(field.points()[0].vx < 0.0, "x reflection");
        assert!(field.points()[1].vy > 0.0, "y reflection");
    }

    #[test]
    fn test_distant_pair_draws_no_line() {
        let mut field = ParticleField::new(400.0, 400.0, 2, 150.0);
        field.place(vec![point_at(0.0, 0.0, 0.0, 0.0), point_at(150.0, 0.0, 0.0, 0.0)]);

        let mut surface = RecordingSurface::default();
        field.step(&mut surface);

        assert_eq!(surface.circles.len(), 2);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_coincident_pair_draws_full_opacity_line() {
        let mut field = ParticleField::new(400.0, 400.0, 2, 150.0);
        field.place(vec![point_at(200.0, 200.0, 0.0, 0.0), point_at(200.0, 200.0, 0.0, 0.0)]);

        let mut surface = RecordingSurface::default();
        field.step(&mut surface);

        assert_eq!(surface.lines.len(), 1);
        assert_eq!(surface.lines[0].4, 1.0);
    }

    #[test]
    fn test_opacity_falls_off_linearly() {
        let mut field = ParticleField::new(400.0, 400.0, 2, 150.0);
        field.place(vec![point_at(0.0, 100.0, 0.0, 0.0), point_at(75.0, 100.0, 0.0, 0.0)]);

        let mut surface = RecordingSurface::default();
        field.step(&mut surface);

        assert_eq!(surface.lines.len(), 1);
        assert!((surface.lines[0].4 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_step_clears_previous_frame() {
        let mut field = ParticleField::new(400.0, 400.0, 3, 150.0);
        let mut surface = RecordingSurface::default();

        field.step(&mut surface);
        field.step(&mut surface);

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.circles.len(), 3);
        assert_eq!(field.frame(), 2);
    }
}
