// Simple particle struct to keep track of individual position, velocity,
// radius, and color. Each particle knows how to advance itself one frame and
// paint itself onto the surface.

use crate::color::{self, Color};
use crate::pointer::PointerState;
use crate::surface::{Surface, SurfaceSize};
use rand::Rng;
use vecmath::{self, Vector2};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    /// Distance inside which the pointer pushes particles away.
    pub const PUSH_RADIUS: f64 = 80.0;
    /// Displacement per frame at zero distance; falls off linearly to zero
    /// at `PUSH_RADIUS`.
    pub const PUSH_STRENGTH: f64 = 2.0;
    /// Per-axis velocity magnitude cap used when sampling spawn velocities.
    pub const MAX_VELOCITY: f64 = 0.2;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
        }
    }

    /// Sample a spawn state: radius in [1, 3), position inset from every edge
    /// by twice the radius so the disc starts fully visible, velocity per
    /// axis in [-MAX_VELOCITY, MAX_VELOCITY).
    pub fn random(bounds: SurfaceSize, rng: &mut impl Rng) -> Particle {
        let size = rng.gen::<f64>() * 2.0 + 1.0;
        let inset = size * 2.0;
        let x = rng.gen::<f64>() * (bounds.width as f64 - inset * 2.0) + inset;
        let y = rng.gen::<f64>() * (bounds.height as f64 - inset * 2.0) + inset;
        let vel_x = rng.gen::<f64>() * Self::MAX_VELOCITY * 2.0 - Self::MAX_VELOCITY;
        let vel_y = rng.gen::<f64>() * Self::MAX_VELOCITY * 2.0 - Self::MAX_VELOCITY;
        Particle::new([x, y], [vel_x, vel_y], size, color::ACCENT)
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.size, self.color);
    }

    /// Advance one frame: reflect velocity at the surface edges, nudge the
    /// position away from a nearby pointer, integrate, draw.
    pub fn update(
        &mut self,
        bounds: SurfaceSize,
        pointer: &PointerState,
        surface: &mut impl Surface,
    ) {
        if self.pos[0] > bounds.width as f64 || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > bounds.height as f64 || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }

        if let Some(cursor) = pointer.position() {
            let away = vecmath::vec2_sub(self.pos, cursor);
            let distance = vecmath::vec2_len(away);
            // Skip at zero distance: no defined away direction.
            if distance > 0.0 && distance < Self::PUSH_RADIUS {
                let falloff = (Self::PUSH_RADIUS - distance) / Self::PUSH_RADIUS;
                let push =
                    vecmath::vec2_scale(vecmath::vec2_normalized(away), falloff * Self::PUSH_STRENGTH);
                // Positional nudge, not a velocity change; it does not
                // accumulate as momentum.
                self.pos = vecmath::vec2_add(self.pos, push);
            }
        }

        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.draw(surface);
    }
}
