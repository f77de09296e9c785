use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use orrery_engine::FrameScheduler;

type FrameCallback = Closure<dyn FnMut()>;

/// Schedules frames with `window.requestAnimationFrame`.
///
/// Clones share one callback slot, so the frame closure can hold a clone of
/// the scheduler that registered it and re-register itself each frame.
#[derive(Clone, Default)]
pub struct AnimationFrameScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the closure run on every animation frame.
    pub fn set_callback(&self, callback: FrameCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("scheduler: frame requested before a callback was set");
            return;
        };
        let Some(window) = web_sys::window() else {
            log::warn!("scheduler: no window to request a frame from");
            return;
        };
        if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("scheduler: requestAnimationFrame failed: {err:?}");
        }
    }
}
