use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, Window};
use yew::NodeRef;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("failed to add `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Viewport-relative `(top, bottom, height)` of the element behind `node`.
pub fn client_bounds(node: &NodeRef) -> Option<(f64, f64, f64)> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.bottom(), rect.height()))
}

pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// A window event subscription that lasts exactly as long as this value.
///
/// The listener is removed on drop, so holding it in an effect's cleanup
/// closure releases it on unmount and on every re-run of the effect.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::Listener {
                event,
                detail: format!("{:?}", err),
            })?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove `{}` listener: {:?}", self.event, err);
        }
    }
}
