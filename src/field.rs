//! The drifting-glyph particle field behind the page.
//!
//! State and integration only; painting lives in the wasm renderer. The RNG
//! is passed in so a seeded `fastrand::Rng` reproduces a field exactly.

/// Number of glyphs kept in the air. Fixed for the page lifetime.
pub const PARTICLE_COUNT: usize = 30;

/// Glyph alphabet the particles draw from.
pub const GLYPHS: [&str; 6] = ["<>", "{ }", "</>", "⚙️", "AI", "DB"];

/// Current drawing-surface bounds. Only the wrap math reads this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One animated glyph. Velocity is fixed at creation; only the position
/// moves, wrapping toroidally at the viewport edges.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub glyph: &'static str,
    pub size: f64,
    pub hue: f64,
}

impl Particle {
    fn random(viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
        Self {
            x: rng.f64() * viewport.width,
            y: rng.f64() * viewport.height,
            vx: (rng.f64() - 0.5) * 0.4,
            vy: (rng.f64() - 0.5) * 0.4,
            glyph: GLYPHS[rng.usize(..GLYPHS.len())],
            size: 14.0 + rng.f64() * 22.0,
            hue: 200.0 + rng.f64() * 100.0,
        }
    }

    /// Step one frame and re-enter from the opposite edge when leaving.
    pub fn advance(&mut self, viewport: Viewport) {
        self.x = (self.x + self.vx).rem_euclid(viewport.width);
        self.y = (self.y + self.vy).rem_euclid(viewport.height);
    }
}

/// The full field: a fixed batch of particles plus the wrap bounds.
#[derive(Clone, Debug)]
pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(viewport, rng))
            .collect();
        Self { viewport, particles }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame's worth of its velocity.
    ///
    /// Deliberately ignores real elapsed time between calls, matching the
    /// original page: the drift speed rides the display refresh rate.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.advance(self.viewport);
        }
    }

    /// Adopt new bounds after a viewport resize. Positions are not rescaled;
    /// only future wraps see the new edges.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
