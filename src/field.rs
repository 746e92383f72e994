// The animated particle background: a list of particles plus an
// Idle/Running loop that redraws them once per frame and joins nearby
// pairs with fading lines.

use crate::frames::FrameScheduler;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::theme::{Theme, ThemeStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::mem;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;

enum LoopState<H> {
    Idle,
    Running(H),
}

pub struct ParticleField<S, F: FrameScheduler> {
    // None when the page has no usable canvas; every operation is then a no-op
    surface: Option<S>,
    frames: F,
    particles: Vec<Particle>,
    state: LoopState<F::Handle>,
    style: &'static ThemeStyle,
    rng: StdRng,
}

impl<S: Surface, F: FrameScheduler> ParticleField<S, F> {
    pub fn new(surface: Option<S>, frames: F) -> Self {
        ParticleField::with_rng(surface, frames, StdRng::from_entropy())
    }

    pub fn with_rng(surface: Option<S>, frames: F, rng: StdRng) -> Self {
        if surface.is_none() {
            log::warn!("no drawing surface, particle field disabled");
        }
        ParticleField {
            surface,
            frames,
            particles: Vec::new(),
            state: LoopState::Idle,
            style: Theme::default().style(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Matches the surface to the viewport. Particles keep their positions
    /// and are wrapped back inside on the next frame.
    pub fn resize_surface(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let (width, height) = surface.viewport_size();
            surface.set_size(width, height);
        }
    }

    /// Populates the field for `theme` and starts the loop. Ignored while a
    /// loop is already running.
    pub fn init(&mut self, theme: Theme) {
        if self.surface.is_none() || self.is_running() {
            return;
        }
        self.resize_surface();
        let (width, height) = match self.surface.as_ref() {
            Some(surface) => surface.size(),
            None => return,
        };

        let style = theme.style();
        let rng = &mut self.rng;
        self.style = style;
        self.particles.clear();
        self.particles.extend(
            (0..style.particle_count)
                .map(|_| Particle::random(rng, f64::from(width), f64::from(height), style)),
        );
        log::debug!(
            "particle field started: {} {} particles on {}x{}",
            self.particles.len(),
            theme.as_str(),
            width,
            height
        );
        self.schedule();
    }

    /// Stops the loop, wipes the surface and drops every particle.
    pub fn clear(&mut self) {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return,
        };
        if let LoopState::Running(handle) = mem::replace(&mut self.state, LoopState::Idle) {
            self.frames.cancel_frame(handle);
        }
        surface.clear();
        self.particles.clear();
    }

    pub fn restart(&mut self, theme: Theme) {
        self.clear();
        self.init(theme);
    }

    /// One frame: move, draw, link, reschedule.
    pub fn step_frame(&mut self) {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return,
        };
        // a callback that outlived clear()
        if !matches!(self.state, LoopState::Running(_)) {
            return;
        }

        let (width, height) = surface.size();
        let (width, height) = (f64::from(width), f64::from(height));
        surface.clear();
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.size, particle.color, particle.opacity);
        }
        draw_links(surface, &self.particles, self.style.link_opacity);
        surface.reset_alpha();

        self.schedule();
    }

    fn schedule(&mut self) {
        self.state = match self.frames.request_frame() {
            Ok(handle) => LoopState::Running(handle),
            Err(err) => {
                log::warn!("particle field stopped: {}", err);
                LoopState::Idle
            }
        };
    }
}

/// Alpha of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be joined.
pub fn link_opacity(distance: f64, multiplier: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some((LINK_DISTANCE - distance) / LINK_DISTANCE * multiplier)
    } else {
        None
    }
}

// O(n^2) over unordered pairs; each line takes the colour of its first particle
fn draw_links<S: Surface>(surface: &mut S, particles: &[Particle], multiplier: f64) {
    for (i, a) in particles.iter().enumerate() {
        let from = glm::vec2(a.pos[0], a.pos[1]);
        for b in &particles[i + 1..] {
            let distance = glm::distance(&from, &glm::vec2(b.pos[0], b.pos[1]));
            if let Some(alpha) = link_opacity(distance, multiplier) {
                surface.stroke_line(a.pos, b.pos, a.color, alpha);
            }
        }
    }
}
