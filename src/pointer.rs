// Last known pointer position over the hero surface, or absent when the
// pointer has left (or was never seen). Read by particle repulsion and the
// pointer-link pass each frame.

use crate::surface::SurfaceSize;
use vecmath::Vector2;

pub struct PointerState {
    position: Option<Vector2<f64>>,
    radius: f64,
}

impl PointerState {
    pub fn new(bounds: SurfaceSize) -> PointerState {
        PointerState {
            position: None,
            radius: Self::radius_for(bounds),
        }
    }

    /// Interaction radius derived from surface area. This is an area-like
    /// quantity compared against squared distances, not a linear radius.
    pub fn radius_for(bounds: SurfaceSize) -> f64 {
        (bounds.width as f64 / 10.0) * (bounds.height as f64 / 10.0)
    }

    pub fn moved_to(&mut self, x: f64, y: f64) {
        self.position = Some([x, y]);
    }

    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn rescale(&mut self, bounds: SurfaceSize) {
        self.radius = Self::radius_for(bounds);
    }

    pub fn position(&self) -> Option<Vector2<f64>> {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_until_first_move() {
        let pointer = PointerState::new(SurfaceSize::new(900, 900));
        assert!(pointer.position().is_none());
    }

    #[test]
    fn move_then_leave_round_trip() {
        let mut pointer = PointerState::new(SurfaceSize::new(900, 900));
        pointer.moved_to(12.5, 40.0);
        assert_eq!(pointer.position(), Some([12.5, 40.0]));
        pointer.left();
        assert!(pointer.position().is_none());
    }

    #[test]
    fn radius_is_area_derived() {
        let mut pointer = PointerState::new(SurfaceSize::new(900, 900));
        assert_eq!(pointer.radius(), 8100.0);
        pointer.rescale(SurfaceSize::new(300, 200));
        assert_eq!(pointer.radius(), 600.0);
    }
}
