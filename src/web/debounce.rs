// debounce.rs - setTimeout behind schedule::Debounce
//
// The timeout carries its token back so only the live one runs the action.

use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::schedule::{Debounce, Timer};

pub struct WindowTimer {
    window: Window,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl Timer for WindowTimer {
    fn set(&self, delay_ms: i32, token: u32) -> Option<i32> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                self.callback.as_ref().unchecked_ref(),
                delay_ms,
                &JsValue::from(token),
            )
            .map_err(|e| log::trace!("setTimeout failed: {e:?}"))
            .ok()
    }

    fn clear(&self, id: i32) {
        self.window.clear_timeout_with_handle(id);
    }
}

pub type ResizeDebounce = Debounce<WindowTimer>;

pub fn resize_debounce(window: &Window, delay_ms: i32, mut action: impl FnMut() + 'static) -> Rc<ResizeDebounce> {
    Rc::new_cyclic(|weak: &Weak<ResizeDebounce>| {
        // Weak: the timer callback must not keep its own debounce alive
        let weak = weak.clone();
        let callback = Closure::wrap(Box::new(move |token: JsValue| {
            let Some(debounce) = weak.upgrade() else { return };
            let live = token.as_f64().is_some_and(|t| debounce.fire(t as u32));
            if live {
                action();
            }
        }) as Box<dyn FnMut(JsValue)>);

        Debounce::new(WindowTimer { window: window.clone(), callback }, delay_ms)
    })
}
