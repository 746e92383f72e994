// Recording doubles for the surface and frame scheduler.

use crate::color::Color;
use crate::error::Error;
use crate::frames::FrameScheduler;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear,
    Circle {
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
    },
    ResetAlpha,
}

pub struct RecordingSurface {
    pub size: (u32, u32),
    pub viewport: (u32, u32),
    pub draws: Vec<Draw>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            size: (0, 0),
            viewport: (width, height),
            draws: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&Draw> {
        self.draws
            .iter()
            .filter(|d| matches!(d, Draw::Line { .. }))
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.draws
            .iter()
            .filter(|d| matches!(d, Draw::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn clear(&mut self) {
        self.draws.push(Draw::Clear);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) {
        self.draws.push(Draw::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64) {
        self.draws.push(Draw::Line {
            from,
            to,
            color,
            alpha,
        });
    }

    fn reset_alpha(&mut self) {
        self.draws.push(Draw::ResetAlpha);
    }
}

/// Hands out increasing handles and remembers which are still pending.
#[derive(Default)]
pub struct ManualFrames {
    pub next: u32,
    pub pending: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub fail: bool,
}

impl FrameScheduler for ManualFrames {
    type Handle = u32;

    fn request_frame(&mut self) -> Result<u32, Error> {
        if self.fail {
            return Err(Error::FrameCallbackMissing);
        }
        self.next += 1;
        self.pending.push(self.next);
        Ok(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

impl ManualFrames {
    // The browser consumes a request when it runs the callback
    pub fn fire(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}
