use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::dom::{self, DomError, WindowListener};
use crate::motion::reveal::RevealBand;
use crate::motion::scroll::{ScrollObservation, TrackedRegion};

/// Re-runs `measure` on every window scroll and resize for as long as the
/// calling component is mounted, plus once on mount.
fn watch_viewport(mut measure: impl FnMut() + Clone + 'static) -> Result<[WindowListener; 2], DomError> {
    measure();
    let on_scroll = WindowListener::new("scroll", {
        let mut measure = measure.clone();
        move |_| measure()
    })?;
    let on_resize = WindowListener::new("resize", move |_| measure())?;
    Ok([on_scroll, on_resize])
}

/// Scroll progress through the section behind `node`, which is expected to
/// pin its content while it scrolls past.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> ScrollObservation {
    let observation = use_state(ScrollObservation::default);
    {
        let setter = observation.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let last = Rc::new(Cell::new(ScrollObservation::default()));
                let measure = move || {
                    let Ok(window) = dom::window() else {
                        return;
                    };
                    let Some((top, _, height)) = dom::client_bounds(&node) else {
                        return;
                    };
                    let offset = dom::scroll_y(&window);
                    let region = TrackedRegion::pinned(top + offset, height, dom::viewport_height(&window));
                    let next = region.observe(offset);
                    if next != last.get() {
                        last.set(next);
                        setter.set(next);
                    }
                };
                let listeners = watch_viewport(measure)
                    .map_err(|err| warn!("scroll progress disabled: {}", err))
                    .ok();
                move || drop(listeners)
            },
            node,
        );
    }
    *observation
}

/// Whether the element behind `node` sits inside `band`. With `once` the
/// flag latches after the first reveal.
#[hook]
pub fn use_in_view(node: NodeRef, band: RevealBand, once: bool) -> bool {
    let in_view = use_state(|| false);
    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let last = Rc::new(Cell::new(false));
                let measure = move || {
                    if once && last.get() {
                        return;
                    }
                    let Ok(window) = dom::window() else {
                        return;
                    };
                    let Some((top, bottom, _)) = dom::client_bounds(&node) else {
                        return;
                    };
                    let next = band.is_in_view(top, bottom, dom::viewport_height(&window));
                    if next != last.get() {
                        last.set(next);
                        setter.set(next);
                    }
                };
                let listeners = watch_viewport(measure)
                    .map_err(|err| warn!("in-view tracking disabled: {}", err))
                    .ok();
                move || drop(listeners)
            },
            node,
        );
    }
    *in_view
}
