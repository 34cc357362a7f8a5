//! BackgroundMount - the engine running as a page background
//!
//! Owns everything the page integration needs:
//! - a fixed, full-viewport `<canvas>` behind the content
//! - window `resize`, document `mousemove` / `mouseleave` listeners
//! - the `requestAnimationFrame` chain, driven through `FrameLoop`
//!
//! Closures hold a `Weak` to the shared state, so dropping the mount (or
//! `detach()`) tears everything down without leaking a cycle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use crate::domain::config::{CANVAS_ID, CANVAS_OPACITY, CANVAS_Z_INDEX};
use crate::simulation::{EngineCore, FrameLoop};

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

struct MountState {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    engine: RefCell<EngineCore>,
    frame_loop: RefCell<FrameLoop>,
    frame_handle: Cell<Option<i32>>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    listeners: RefCell<Vec<Listener>>,
}

#[wasm_bindgen]
pub struct BackgroundMount {
    state: Option<Rc<MountState>>,
}

#[wasm_bindgen]
impl BackgroundMount {
    /// Create the background canvas under `document.body` and start animating
    pub fn attach() -> Result<BackgroundMount, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        style_canvas(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);
        body.append_child(&canvas)?;

        let state = Rc::new(MountState {
            window,
            canvas,
            ctx,
            engine: RefCell::new(EngineCore::new(width, height)),
            frame_loop: RefCell::new(FrameLoop::new()),
            frame_handle: Cell::new(None),
            frame_callback: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        if let Err(err) = install_listeners(&state, &document) {
            state.teardown();
            return Err(err);
        }

        if state.frame_loop.borrow_mut().start() {
            start_frames(&state);
        }

        {
            let engine = state.engine.borrow();
            console_log!(
                "life-backdrop: attached {}x{} px ({}x{} cells)",
                engine.width(),
                engine.height(),
                engine.cols(),
                engine.rows()
            );
        }

        Ok(BackgroundMount { state: Some(state) })
    }

    /// Stop the loop, drop the listeners and remove the canvas. Idempotent.
    pub fn detach(&mut self) {
        if let Some(state) = self.state.take() {
            state.teardown();
            console_log!("life-backdrop: detached");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.state
            .as_ref()
            .map(|s| s.frame_loop.borrow().is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 {
        self.state
            .as_ref()
            .map(|s| s.engine.borrow().generation())
            .unwrap_or(0)
    }
}

impl Drop for BackgroundMount {
    fn drop(&mut self) {
        self.detach();
    }
}

impl MountState {
    fn on_frame(&self, now: f64) {
        self.frame_handle.set(None);
        let mut ctx = self.ctx.clone();
        let reschedule = self
            .frame_loop
            .borrow_mut()
            .on_frame(&mut self.engine.borrow_mut(), &mut ctx, now);
        if reschedule {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.frame_handle.set(Some(handle)),
            Err(err) => {
                console_warn!("life-backdrop: requestAnimationFrame failed: {:?}", err);
                self.frame_loop.borrow_mut().stop();
            }
        }
    }

    fn on_resize(&self) {
        let (width, height) = viewport_size(&self.window);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.engine.borrow_mut().resize(width, height);
    }

    fn teardown(&self) {
        self.frame_loop.borrow_mut().stop();
        if let Some(handle) = self.frame_handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                console_warn!("life-backdrop: cancelAnimationFrame failed: {:?}", err);
            }
        }
        for listener in self.listeners.borrow_mut().drain(..) {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.callback.as_ref().unchecked_ref())
            {
                console_warn!("life-backdrop: removing {} listener failed: {:?}", listener.kind, err);
            }
        }
        self.canvas.remove();
        self.frame_callback.borrow_mut().take();
    }
}

fn style_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.set_id(CANVAS_ID);
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("z-index", CANVAS_Z_INDEX)?;
    style.set_property("opacity", CANVAS_OPACITY)?;
    style.set_property("pointer-events", "none")?;
    Ok(())
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let px = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    };
    (px(window.inner_width()), px(window.inner_height()))
}

fn start_frames(state: &Rc<MountState>) {
    let weak: Weak<MountState> = Rc::downgrade(state);
    let callback = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        if let Some(state) = weak.upgrade() {
            state.on_frame(now);
        }
    });
    *state.frame_callback.borrow_mut() = Some(callback);
    state.request_frame();
}

fn listen<F>(state: &Rc<MountState>, target: EventTarget, kind: &'static str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(&MountState, Event) + 'static,
{
    let weak = Rc::downgrade(state);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(state) = weak.upgrade() {
            handler(&state, event);
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    state.listeners.borrow_mut().push(Listener { target, kind, callback });
    Ok(())
}

fn install_listeners(state: &Rc<MountState>, document: &Document) -> Result<(), JsValue> {
    listen(state, state.window.clone().into(), "resize", |state, _| {
        state.on_resize();
    })?;
    listen(state, document.clone().into(), "mousemove", |state, event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            state
                .engine
                .borrow_mut()
                .set_pointer(mouse.client_x() as f64, mouse.client_y() as f64);
        }
    })?;
    listen(state, document.clone().into(), "mouseleave", |state, _| {
        state.engine.borrow_mut().clear_pointer();
    })?;
    Ok(())
}
