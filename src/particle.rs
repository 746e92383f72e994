// Simple particle struct to keep track of individual position, velocity, and
// appearance. Everything but the position is fixed at creation.

use crate::color::Color;
use crate::theme::ThemeStyle;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub const MAX_SPEED: f64 = 0.25;
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 3.0;

    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, style: &ThemeStyle) -> Particle {
        let (min_opacity, max_opacity) = style.opacity;
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                rng.gen_range(-Particle::MAX_SPEED, Particle::MAX_SPEED),
                rng.gen_range(-Particle::MAX_SPEED, Particle::MAX_SPEED),
            ],
            size: rng.gen_range(Particle::MIN_SIZE, Particle::MAX_SIZE),
            opacity: rng.gen_range(min_opacity, max_opacity),
            color: if rng.gen_bool(0.5) {
                style.palette[0]
            } else {
                style.palette[1]
            },
        }
    }

    // Moves by one velocity step, reappearing at the opposite edge when
    // leaving the surface
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap(self.pos[0] + self.vel[0], width);
        self.pos[1] = wrap(self.pos[1] + self.vel[1], height);
    }
}

/// Maps `value` into `[0, bound)`. Overshooting the far edge lands on 0,
/// undershooting 0 lands just inside the far edge.
pub fn wrap(value: f64, bound: f64) -> f64 {
    if bound.is_nan() || bound <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    if value >= bound {
        0.0
    } else if value < 0.0 {
        // rem_euclid can round up to `bound` for tiny negatives
        let wrapped = value.rem_euclid(bound);
        if wrapped < bound {
            wrapped
        } else {
            0.0
        }
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            pos: [x, y],
            vel: [vx, vy],
            size: 1.0,
            opacity: 0.5,
            color: Color::from_u32(0xffffff),
        }
    }

    #[test]
    fn crossing_far_edge_wraps_to_zero() {
        let mut p = particle_at(799.9, 10.0, 0.5, 0.0);
        p.advance(800.0, 600.0);
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 1e-9, "x = {}", p.pos[0]);
        assert_eq!(p.pos[1], 10.0);
    }

    #[test]
    fn crossing_zero_wraps_to_far_edge() {
        let mut p = particle_at(0.1, 0.1, -0.5, -0.2);
        p.advance(800.0, 600.0);
        assert!((p.pos[0] - 799.6).abs() < 1e-9, "x = {}", p.pos[0]);
        assert!((p.pos[1] - 599.9).abs() < 1e-9, "y = {}", p.pos[1]);
    }

    #[test]
    fn position_beyond_shrunk_surface_returns_inside() {
        let mut p = particle_at(1500.0, 900.0, 0.1, 0.1);
        p.advance(800.0, 600.0);
        assert_eq!(p.pos, [0.0, 0.0]);
    }

    #[test]
    fn zero_sized_surface_pins_to_origin() {
        assert_eq!(wrap(12.0, 0.0), 0.0);
        assert_eq!(wrap(-3.0, 0.0), 0.0);
    }

    #[test]
    fn tiny_negative_does_not_round_onto_bound() {
        let w = wrap(-1e-300, 100.0);
        assert!(w >= 0.0 && w < 100.0);
    }

    #[test]
    fn random_particles_respect_dark_style() {
        let mut rng = StdRng::seed_from_u64(7);
        let style = Theme::Dark.style();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, style);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel.iter().all(|v| v.abs() <= Particle::MAX_SPEED));
            assert!(p.size >= 1.0 && p.size < 3.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
            assert!(style.palette.contains(&p.color));
        }
    }

    proptest! {
        #[test]
        fn wrap_stays_in_bounds(value in -1.0e6f64..1.0e6, bound in 1.0f64..4096.0) {
            let w = wrap(value, bound);
            prop_assert!(w >= 0.0 && w < bound, "wrap({}, {}) = {}", value, bound, w);
        }

        #[test]
        fn in_range_values_are_untouched(frac in 0.0f64..1.0, bound in 1.0f64..4096.0) {
            let value = frac * bound;
            prop_assume!(value < bound);
            prop_assert_eq!(wrap(value, bound), value);
        }
    }
}
