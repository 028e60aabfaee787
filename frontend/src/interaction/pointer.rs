use web_sys::Element;

use crate::config::{CURSOR_HOVER_SCALE, HOVER_TRIGGER_ATTR};
use crate::motion::spring::{Spring, SpringConfig};

/// Tags that always count as clickable controls.
const INTERACTIVE_TAGS: [&str; 2] = ["BUTTON", "A"];

/// A node that can be hit-tested for the cursor's hover state.
pub trait HitTarget: Sized {
    fn tag_name(&self) -> String;
    fn has_attribute(&self, name: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

impl HitTarget for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

fn is_marked<T: HitTarget>(node: &T) -> bool {
    let tag = node.tag_name();
    INTERACTIVE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
        || node.has_attribute(HOVER_TRIGGER_ATTR)
}

/// True when `target` or any of its ancestors is an interactive control.
pub fn is_interactive<T: HitTarget>(target: &T) -> bool {
    if is_marked(target) {
        return true;
    }
    let mut ancestor = target.parent();
    while let Some(node) = ancestor {
        if is_marked(&node) {
            return true;
        }
        ancestor = node.parent();
    }
    false
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub is_over_interactive: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Returns whether the hover flag changed.
    pub fn hovered(&mut self, interactive: bool) -> bool {
        let changed = self.is_over_interactive != interactive;
        self.is_over_interactive = interactive;
        changed
    }

    pub fn scale(&self) -> f64 {
        if self.is_over_interactive {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        }
    }
}

/// Smoothed on-screen position of the cursor dot.
#[derive(Clone, Debug)]
pub struct CursorMotion {
    x: Spring,
    y: Spring,
    last_frame_ms: Option<f64>,
}

impl CursorMotion {
    pub fn new(config: SpringConfig, start: (f64, f64)) -> Self {
        Self {
            x: Spring::new(config, start.0),
            y: Spring::new(config, start.1),
            last_frame_ms: None,
        }
    }

    /// Advances one animation frame and returns the new position, or `None`
    /// while the dot rests on the pointer. `now_ms` is only read for frames
    /// that move. The first frame after a rest assumes `default_dt`.
    pub fn frame(&mut self, now_ms: impl FnOnce() -> f64, default_dt: f64) -> Option<(f64, f64)> {
        if self.is_settled() {
            self.last_frame_ms = None;
            return None;
        }
        let now = now_ms();
        let dt = self
            .last_frame_ms
            .map_or(default_dt, |last| (now - last) / 1000.0);
        self.last_frame_ms = Some(now);
        Some(self.tick(dt))
    }

    pub fn follow(&mut self, pointer: &PointerState) {
        self.x.set_target(pointer.x);
        self.y.set_target(pointer.y);
    }

    pub fn tick(&mut self, dt: f64) -> (f64, f64) {
        (self.x.advance(dt), self.y.advance(dt))
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
