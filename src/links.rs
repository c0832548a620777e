// Per-frame link pass: translucent segments between nearby particle pairs
// and from the pointer to nearby particles. Quadratic in the particle count,
// which the density constant keeps small enough on purpose.

use crate::color;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::{Surface, SurfaceSize};
use vecmath;

/// Squared-distance cutoff below which two particles are joined. Like the
/// pointer radius this is an area-derived quantity, not a linear distance.
pub fn link_threshold(bounds: SurfaceSize) -> f64 {
    (bounds.width as f64 / 7.0) * (bounds.height as f64 / 7.0)
}

/// Stroke opacity for a link at squared distance `dist_sq`, or `None` when
/// the pair is out of range (or the threshold is degenerate).
pub fn link_opacity(dist_sq: f64, threshold: f64) -> Option<f64> {
    if dist_sq < threshold {
        Some(1.0 - dist_sq / threshold)
    } else {
        None
    }
}

pub fn draw_links(
    particles: &[Particle],
    pointer: &PointerState,
    bounds: SurfaceSize,
    surface: &mut impl Surface,
) {
    let threshold = link_threshold(bounds);
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist_sq = vecmath::vec2_square_len(vecmath::vec2_sub(a.pos, b.pos));
            if let Some(opacity) = link_opacity(dist_sq, threshold) {
                surface.stroke_line(a.pos, b.pos, color::ACCENT, opacity);
            }
        }
    }

    if let Some(cursor) = pointer.position() {
        let radius = pointer.radius();
        for p in particles {
            let dist_sq = vecmath::vec2_square_len(vecmath::vec2_sub(p.pos, cursor));
            if let Some(opacity) = link_opacity(dist_sq, radius) {
                surface.stroke_line(cursor, p.pos, color::ACCENT_LIGHT, opacity);
            }
        }
    }
}
