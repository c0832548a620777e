// Frame loop. `Simulation` bundles the shared state every frame reads and
// writes (field, pointer, dimensions); `Animation` adds the
// idle/running state machine and delegates frame timing to a
// `FrameScheduler` supplied by the host.

use crate::field::ParticleField;
use crate::links;
use crate::pointer::PointerState;
use crate::surface::{Surface, SurfaceSize};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything one frame reads and writes, owned in one place instead of
/// ambient globals.
pub struct Simulation {
    bounds: SurfaceSize,
    field: ParticleField,
    pointer: PointerState,
}

impl Simulation {
    pub fn new(width: u32, height: u32) -> Simulation {
        let bounds = SurfaceSize::new(width, height);
        let mut field = ParticleField::new();
        field.populate(bounds);
        Simulation {
            bounds,
            field,
            pointer: PointerState::new(bounds),
        }
    }

    /// One frame: wipe, advance-and-draw every particle, draw links.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        surface.clear(self.bounds);
        self.field.tick(self.bounds, &self.pointer, surface);
        links::draw_links(self.field.particles(), &self.pointer, self.bounds, surface);
    }

    /// New surface dimensions: rescale the pointer radius and replace the
    /// whole field. Nothing from the old population survives.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = SurfaceSize::new(width, height);
        self.pointer.rescale(self.bounds);
        self.field.populate(self.bounds);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.moved_to(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    pub fn bounds(&self) -> SurfaceSize {
        self.bounds
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }
}

/// Host frame-timing primitive. The implementor must invoke the callback
/// once per display refresh for as long as the page lives; tests drive it
/// by hand instead.
pub trait FrameScheduler {
    fn schedule(&mut self, frame: Box<dyn FnMut()>);
}

/// Idle until `start`, then Running for the life of the page.
pub struct Animation<S: Surface> {
    sim: Simulation,
    surface: S,
    running: bool,
}

impl<S: Surface + 'static> Animation<S> {
    pub fn new(sim: Simulation, surface: S) -> Animation<S> {
        Animation {
            sim,
            surface,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame if Running; a tick while Idle is a no-op.
    pub fn frame(&mut self) {
        if self.running {
            self.sim.frame(&mut self.surface);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.sim.resize(width, height);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.sim.pointer_moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.sim.pointer_left();
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Idle -> Running; hands the frame callback to the scheduler. Calling
    /// again while Running is a no-op.
    pub fn start(anim: &Rc<RefCell<Self>>, scheduler: &mut impl FrameScheduler) {
        {
            let mut anim = anim.borrow_mut();
            if anim.running {
                return;
            }
            anim.running = true;
        }
        let tick = {
            let anim = Rc::clone(anim);
            move || anim.borrow_mut().frame()
        };
        scheduler.schedule(Box::new(tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ParticleField;
    use crate::surface::test_util::{NullSurface, RecordingSurface};

    /// Deterministic stand-in for requestAnimationFrame: holds the frame
    /// callback and fires it on demand.
    #[derive(Default)]
    struct ManualScheduler {
        frame: Option<Box<dyn FnMut()>>,
    }

    impl ManualScheduler {
        fn step(&mut self, frames: usize) {
            let frame = self.frame.as_mut().expect("no frame scheduled");
            for _ in 0..frames {
                frame();
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn schedule(&mut self, frame: Box<dyn FnMut()>) {
            self.frame = Some(frame);
        }
    }

    #[test]
    fn nine_hundred_square_surface_gets_ninety_particles() {
        let sim = Simulation::new(900, 900);
        assert_eq!(sim.field().len(), 90);
    }

    #[test]
    fn resize_recomputes_population_and_replaces_particles() {
        let mut sim = Simulation::new(900, 900);
        let before: Vec<[f64; 2]> = sim.field().particles().iter().map(|p| p.pos).collect();
        sim.resize(600, 600);
        assert_eq!(sim.field().len(), 40);
        for p in sim.field().particles() {
            assert!(!before.contains(&p.pos));
        }
    }

    #[test]
    fn idle_animation_ignores_frames() {
        let anim = Rc::new(RefCell::new(Animation::new(
            Simulation::new(900, 900),
            RecordingSurface::new(),
        )));
        anim.borrow_mut().frame();
        assert_eq!(anim.borrow().surface().clears, 0);
    }

    #[test]
    fn start_is_idempotent_and_schedules_once() {
        let anim = Rc::new(RefCell::new(Animation::new(
            Simulation::new(300, 300),
            NullSurface,
        )));
        let mut scheduler = ManualScheduler::default();
        Animation::start(&anim, &mut scheduler);
        assert!(anim.borrow().is_running());
        let mut second = ManualScheduler::default();
        Animation::start(&anim, &mut second);
        assert!(second.frame.is_none());
    }

    #[test]
    fn end_to_end_first_frame_is_pure_integration() {
        let anim = Rc::new(RefCell::new(Animation::new(
            Simulation::new(900, 900),
            RecordingSurface::new(),
        )));
        let before: Vec<_> = anim.borrow().sim().field().particles().to_vec();
        assert_eq!(before.len(), 90);

        let mut scheduler = ManualScheduler::default();
        Animation::start(&anim, &mut scheduler);
        scheduler.step(1);

        let anim = anim.borrow();
        let after = anim.sim().field().particles();
        for (old, new) in before.iter().zip(after) {
            assert_eq!(new.pos[0], old.pos[0] + old.vel[0]);
            assert_eq!(new.pos[1], old.pos[1] + old.vel[1]);
            assert!(new.pos[0] >= -0.2 && new.pos[0] <= 900.2);
            assert!(new.pos[1] >= -0.2 && new.pos[1] <= 900.2);
        }
        // The frame cleared once and painted one disc per particle.
        assert_eq!(anim.surface().clears, 1);
        assert_eq!(anim.surface().circles.len(), 90);
    }

    #[test]
    fn pointer_events_flow_into_the_simulation() {
        let anim = Rc::new(RefCell::new(Animation::new(
            Simulation::new(900, 900),
            NullSurface,
        )));
        anim.borrow_mut().pointer_moved(10.0, 20.0);
        assert_eq!(anim.borrow().sim().pointer().position(), Some([10.0, 20.0]));
        anim.borrow_mut().pointer_left();
        assert!(anim.borrow().sim().pointer().position().is_none());
    }

    #[test]
    fn zero_area_surface_runs_with_empty_field() {
        let anim = Rc::new(RefCell::new(Animation::new(
            Simulation::new(0, 0),
            RecordingSurface::new(),
        )));
        let mut scheduler = ManualScheduler::default();
        Animation::start(&anim, &mut scheduler);
        scheduler.step(3);
        let anim = anim.borrow();
        assert!(anim.sim().field().is_empty());
        assert_eq!(anim.surface().clears, 3);
        assert!(anim.surface().lines.is_empty());
    }

    #[test]
    fn population_tracks_density_across_sizes() {
        for (w, h) in [(1280u32, 720u32), (375, 667), (0, 500)].iter().copied() {
            let sim = Simulation::new(w, h);
            assert_eq!(
                sim.field().len(),
                ParticleField::population_for(SurfaceSize::new(w, h))
            );
        }
    }
}
