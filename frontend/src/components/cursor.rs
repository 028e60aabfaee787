use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{js_sys::Date, Element, MouseEvent};
use yew::prelude::*;

use crate::config::{CURSOR_FRAME_MS, CURSOR_SIZE_PX, CURSOR_SPRING, CURSOR_START};
use crate::dom::{DomError, WindowListener};
use crate::interaction::pointer::{is_interactive, CursorMotion, PointerState};

/// Everything the cursor holds while mounted; dropping it unsubscribes.
struct CursorSubscriptions {
    _on_move: WindowListener,
    _on_over: WindowListener,
    _frames: Interval,
}

fn subscribe(
    rendered: UseStateSetter<(f64, f64)>,
    hovered: UseStateSetter<bool>,
) -> Result<CursorSubscriptions, DomError> {
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let motion = Rc::new(RefCell::new(CursorMotion::new(CURSOR_SPRING, CURSOR_START)));
    let half = CURSOR_SIZE_PX / 2.0;

    let on_move = WindowListener::new("mousemove", {
        let pointer = pointer.clone();
        let motion = motion.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut pointer = pointer.borrow_mut();
            pointer.moved(f64::from(event.client_x()) - half, f64::from(event.client_y()) - half);
            motion.borrow_mut().follow(&pointer);
        }
    })?;

    let on_over = WindowListener::new("mouseover", move |event| {
        let interactive = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map_or(false, |element| is_interactive(&element));
        if pointer.borrow_mut().hovered(interactive) {
            hovered.set(interactive);
        }
    })?;

    let frame_dt = f64::from(CURSOR_FRAME_MS) / 1000.0;
    let mut last_position = CURSOR_START;
    let frames = Interval::new(CURSOR_FRAME_MS, move || {
        // Idle while the dot rests on the pointer.
        let Some(position) = motion.borrow_mut().frame(Date::now, frame_dt) else {
            return;
        };
        if position != last_position {
            last_position = position;
            rendered.set(position);
        }
    });

    Ok(CursorSubscriptions {
        _on_move: on_move,
        _on_over: on_over,
        _frames: frames,
    })
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let rendered = use_state(|| CURSOR_START);
    let hovered = use_state(|| false);

    {
        let rendered = rendered.setter();
        let hovered = hovered.setter();
        use_effect_with_deps(
            move |_| {
                let subscriptions = subscribe(rendered, hovered)
                    .map_err(|err| warn!("custom cursor disabled: {}", err))
                    .ok();
                move || drop(subscriptions)
            },
            (),
        );
    }

    let (x, y) = *rendered;
    let scale = PointerState {
        is_over_interactive: *hovered,
        ..PointerState::default()
    }
    .scale();

    html! {
        <>
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        z-index: 9999;
                        mix-blend-mode: difference;
                        display: none;
                        will-change: transform;
                    }
                    .custom-cursor-dot {
                        width: 16px;
                        height: 16px;
                        border-radius: 50%;
                        background: #fff;
                        transition: transform 0.2s ease-out, opacity 0.2s;
                    }
                    @media (min-width: 768px) {
                        .custom-cursor {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div
                class="custom-cursor"
                style={format!("transform: translate3d({:.2}px, {:.2}px, 0);", x, y)}
            >
                <div class="custom-cursor-dot" style={format!("transform: scale({});", scale)}></div>
            </div>
        </>
    }
}
