use std::sync::atomic::{AtomicUsize, Ordering};

use gloo::events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::Callback;

use crate::error::{ModalError, ModalResult};

static ACTIVE_LISTENERS: AtomicUsize = AtomicUsize::new(0);

pub fn is_escape_key(key: &str) -> bool {
    key == "Escape"
}

/// Number of escape listeners currently attached to the window.
pub fn active_escape_listeners() -> usize {
    ACTIVE_LISTENERS.load(Ordering::SeqCst)
}

/// A window-level `keydown` listener that emits `on_escape` for the Escape key.
///
/// The listener stays registered for as long as this value lives and is
/// removed from the window when it is dropped.
pub struct EscapeListener {
    _listener: EventListener,
}

impl EscapeListener {
    pub fn register(on_escape: Callback<()>) -> ModalResult<Self> {
        let window = web_sys::window().ok_or(ModalError::WindowUnavailable)?;

        let listener = EventListener::new(&window, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_escape_key(&event.key()) {
                debug!("Escape pressed, requesting modal close");
                on_escape.emit(());
            }
        });

        let active = ACTIVE_LISTENERS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Escape listener registered ({} active)", active);

        Ok(Self {
            _listener: listener,
        })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        let active = ACTIVE_LISTENERS.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Escape listener removed ({} active)", active);
    }
}
