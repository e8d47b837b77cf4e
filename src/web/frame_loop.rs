// frame_loop.rs - requestAnimationFrame behind schedule::FrameSchedule
//
// The callback hands each frame to the schedule, which decides whether it
// runs and books the next one. Dropping the loop cancels the pending frame.

use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::BackdropError;
use crate::schedule::{FrameHost, FrameSchedule};

pub struct WindowFrames {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl FrameHost for WindowFrames {
    fn request(&self) -> Option<i32> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| log::trace!("requestAnimationFrame failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }
}

pub struct FrameLoop {
    schedule: Rc<FrameSchedule<WindowFrames>>,
}

impl FrameLoop {
    pub fn start(window: &Window, mut frame: impl FnMut() + 'static) -> Result<Self, BackdropError> {
        let schedule = Rc::new_cyclic(|weak: &Weak<FrameSchedule<WindowFrames>>| {
            // Weak: the loop must not keep its own state alive
            let weak = weak.clone();
            let callback = Closure::wrap(Box::new(move || {
                if let Some(schedule) = weak.upgrade() {
                    schedule.on_frame(|| frame());
                }
            }) as Box<dyn FnMut()>);

            FrameSchedule::new(WindowFrames { window: window.clone(), callback })
        });

        if !schedule.start() {
            return Err(BackdropError::Js("first animation frame not booked".into()));
        }
        Ok(Self { schedule })
    }

    /// A next frame is booked
    pub fn is_running(&self) -> bool {
        self.schedule.is_running()
    }
}
