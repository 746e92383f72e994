// What the particle field draws on. The browser implementation is
// canvas::Canvas2d.

use crate::color::Color;

pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn viewport_size(&self) -> (u32, u32);

    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64);

    /// Restores the global alpha to fully opaque.
    fn reset_alpha(&mut self);
}
