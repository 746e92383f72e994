// Animation-frame scheduling. The particle field only sees the
// FrameScheduler trait; BrowserFrames and FrameLoop drive
// requestAnimationFrame on the page.

use crate::error::Error;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// "Run on next frame" capability.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&mut self) -> Result<Self::Handle, Error>;

    /// Discards a pending request so its callback never runs.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Schedules whatever closure is installed in `callback`. The slot starts
// empty so the closure can be built after its owner is shared.
pub struct BrowserFrames {
    window: Window,
    callback: FrameCallback,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        BrowserFrames {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl FrameScheduler for BrowserFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, Error> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref().ok_or(Error::FrameCallbackMissing)?;
        Ok(self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancel_animation_frame({}) failed: {:?}", handle, err);
        }
    }
}

/// Calls `body` once per animation frame for as long as it returns `true`.
#[derive(Clone)]
pub struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new<B>(window: Window, mut body: B) -> Self
    where
        B: FnMut() -> bool + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let this = FrameLoop {
            window,
            callback: callback.clone(),
            pending,
        };
        let weak = Rc::downgrade(&callback);
        let window = this.window.clone();
        let pending = this.pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if !body() {
                return;
            }
            let callback = match weak.upgrade() {
                Some(callback) => callback,
                None => return,
            };
            let slot = callback.borrow();
            if let Some(closure) = slot.as_ref() {
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(err) => log::warn!("request_animation_frame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        this
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedules the next frame unless one is already pending.
    pub fn start(&self) {
        if self.is_pending() {
            return;
        }
        let slot = self.callback.borrow();
        if let Some(closure) = slot.as_ref() {
            match self
                .window
                .request_animation_frame(closure.as_ref().unchecked_ref())
            {
                Ok(id) => self.pending.set(Some(id)),
                Err(err) => log::warn!("request_animation_frame failed: {:?}", err),
            }
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame({}) failed: {:?}", id, err);
            }
        }
    }
}
