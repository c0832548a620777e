// Wasm entry point. Everything here is DOM glue: find the hero canvas and
// its container, size the canvas, wire pointer and resize listeners, and
// drive the simulation from requestAnimationFrame. The simulation itself
// lives in the other modules and never touches the DOM directly.

mod utils;

pub mod color;
pub mod driver;
pub mod field;
pub mod links;
pub mod particle;
pub mod pointer;
pub mod surface;

use driver::{Animation, FrameScheduler, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use surface::CanvasSurface;
use utils::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// `requestAnimationFrame`-backed scheduler. Reschedules before running the
/// frame body, so a fault in one frame cannot stop the loop.
struct RafScheduler {
    window: Window,
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self, mut frame: Box<dyn FnMut()>) {
        let window = self.window.clone();
        let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&handle);
        *handle.borrow_mut() = Some(Closure::new(move || {
            if let Some(tick) = next.borrow().as_ref() {
                request_frame(&window, tick);
            }
            let _timer = Timer::new("hero_particles::frame");
            frame();
        }));
        if let Some(tick) = handle.borrow().as_ref() {
            request_frame(&self.window, tick);
        };
    }
}

fn request_frame(window: &Window, tick: &Closure<dyn FnMut()>) {
    if let Err(err) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        console::error_1(&err);
    }
}

fn container_size(container: &Element) -> (u32, u32) {
    let width = container.client_width().max(0) as u32;
    let height = container.client_height().max(0) as u32;
    (width, height)
}

/// Mount the animation: size the canvas to the container, build the
/// simulation, attach `mousemove`/`mouseout`/`resize` listeners on the
/// window, and start the frame loop. Call once after DOM load.
#[wasm_bindgen]
pub fn run(canvas_id: &str, container_id: &str) -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into()?;
    let container: Element = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str("container element not found"))?;

    let (width, height) = container_size(&container);
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let anim = Rc::new(RefCell::new(Animation::new(
        Simulation::new(width, height),
        CanvasSurface::new(context),
    )));

    {
        // Track the pointer in canvas-relative coordinates.
        let anim = Rc::clone(&anim);
        let canvas = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            anim.borrow_mut().pointer_moved(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
        });
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let anim = Rc::clone(&anim);
        let on_out = Closure::<dyn FnMut()>::new(move || {
            anim.borrow_mut().pointer_left();
        });
        window.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;
        on_out.forget();
    }

    {
        // Resize re-queries the container, resizes the canvas backing store,
        // and rebuilds the field from scratch.
        let anim = Rc::clone(&anim);
        let canvas = canvas.clone();
        let container = container.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = container_size(&container);
            canvas.set_width(width);
            canvas.set_height(height);
            anim.borrow_mut().resize(width, height);
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    Animation::start(&anim, &mut RafScheduler { window });
    Ok(())
}
