// Cursor-driven 3D tilt for the hero image and [data-tilt] cards. Pointer
// positions are relative to the element's bounding rect; angles in degrees.

pub const HERO_DAMPING: f64 = 20.0;
pub const CARD_MAX_DEG: f64 = 8.0;
pub const HOVER_EASING: f64 = 0.08;
pub const SETTLE_EASING: f64 = 0.12;
// within this of the goal counts as arrived
pub const EPSILON_DEG: f64 = 0.01;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation {
        x_deg: 0.0,
        y_deg: 0.0,
    };

    fn ease_toward(&mut self, goal: Rotation, factor: f64) {
        self.x_deg += (goal.x_deg - self.x_deg) * factor;
        self.y_deg += (goal.y_deg - self.y_deg) * factor;
    }

    fn within(&self, goal: Rotation) -> bool {
        (goal.x_deg - self.x_deg).abs() <= EPSILON_DEG && (goal.y_deg - self.y_deg).abs() <= EPSILON_DEG
    }
}

pub fn hero_rotation(pointer: [f64; 2], size: [f64; 2]) -> Rotation {
    let center = [size[0] / 2.0, size[1] / 2.0];
    Rotation {
        x_deg: (pointer[1] - center[1]) / HERO_DAMPING,
        y_deg: (center[0] - pointer[0]) / HERO_DAMPING,
    }
}

pub fn hero_transform(rotation: Rotation) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg)",
        rotation.x_deg, rotation.y_deg
    )
}

// pointer as percentages of the rect, for the card glow
pub fn glow_position(pointer: [f64; 2], size: [f64; 2]) -> Option<(f64, f64)> {
    if size[0] <= 0.0 || size[1] <= 0.0 {
        return None;
    }
    Some((pointer[0] / size[0] * 100.0, pointer[1] / size[1] * 100.0))
}

#[derive(Clone, Debug, Default)]
pub struct CardTilt {
    current: Rotation,
    target: Rotation,
}

impl CardTilt {
    pub fn current(&self) -> Rotation {
        self.current
    }

    pub fn target(&self) -> Rotation {
        self.target
    }

    // a degenerate rect aims flat
    pub fn aim(&mut self, pointer: [f64; 2], size: [f64; 2]) {
        let center = [size[0] / 2.0, size[1] / 2.0];
        if center[0] <= 0.0 || center[1] <= 0.0 {
            self.target = Rotation::ZERO;
            return;
        }
        self.target = Rotation {
            x_deg: (pointer[1] - center[1]) / center[1] * CARD_MAX_DEG,
            y_deg: (center[0] - pointer[0]) / center[0] * CARD_MAX_DEG,
        };
    }

    pub fn ease(&mut self) -> bool {
        self.current.ease_toward(self.target, HOVER_EASING);
        !self.current.within(self.target)
    }

    pub fn release(&mut self) {
        self.target = Rotation::ZERO;
    }

    // snaps flat on the frame that returns false
    pub fn settle(&mut self) -> bool {
        self.current.ease_toward(Rotation::ZERO, SETTLE_EASING);
        if self.current.within(Rotation::ZERO) {
            self.current = Rotation::ZERO;
            false
        } else {
            true
        }
    }

    pub fn hover_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px) scale(1.02)",
            self.current.x_deg, self.current.y_deg
        )
    }

    pub fn settling_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(0) scale(1)",
            self.current.x_deg, self.current.y_deg
        )
    }

    pub const REST_TRANSFORM: &'static str =
        "perspective(1000px) rotateX(0) rotateY(0) translateZ(0) scale(1)";
}
