//! Per-window animation state and the frames pushed to the host.

use hackerland_common::Rect;

use super::channel::{Channel, GEOMETRY_EPSILON, UNIT_EPSILON};
use super::AnimationEngine;

/// Geometric change below this is not worth a host round-trip.
const FRAME_GEOMETRY_THRESHOLD: f64 = 0.5;
/// Same for scale and opacity.
const FRAME_UNIT_THRESHOLD: f64 = 0.01;
/// Frames with opacity below this are sent as invisible.
const VISIBLE_OPACITY: f64 = 0.1;
/// New windows start at this fraction of their target size.
const POP_IN_SIZE: f64 = 0.8;
const HIDDEN_SCALE: f64 = 0.5;

/// What the host is asked to show for one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    /// Integral position and size; width and height are at least 1.
    pub rect: Rect,
    pub scale: f64,
    pub opacity: f64,
    pub visible: bool,
}

impl WindowFrame {
    fn differs_from(&self, other: &WindowFrame) -> bool {
        let geometry = [
            (self.rect.x, other.rect.x),
            (self.rect.y, other.rect.y),
            (self.rect.width, other.rect.width),
            (self.rect.height, other.rect.height),
        ];
        geometry
            .iter()
            .any(|(a, b)| (a - b).abs() > FRAME_GEOMETRY_THRESHOLD)
            || (self.scale - other.scale).abs() > FRAME_UNIT_THRESHOLD
            || (self.opacity - other.opacity).abs() > FRAME_UNIT_THRESHOLD
            || self.visible != other.visible
    }
}

/// Six channels plus the last frame the host accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedWindow {
    pub x: Channel,
    pub y: Channel,
    pub width: Channel,
    pub height: Channel,
    pub scale: Channel,
    pub opacity: Channel,
    last_applied: Option<WindowFrame>,
}

impl AnimatedWindow {
    /// State for a window entering layout control: slightly smaller than
    /// `target`, centred on it, half scale and transparent.
    pub fn pop_in(target: Rect) -> Self {
        let seed = target.centered(target.width * POP_IN_SIZE, target.height * POP_IN_SIZE);
        let mut window = Self {
            x: Channel::at(seed.x),
            y: Channel::at(seed.y),
            width: Channel::at(seed.width),
            height: Channel::at(seed.height),
            scale: Channel::at(HIDDEN_SCALE),
            opacity: Channel::at(0.0),
            last_applied: None,
        };
        window.set_target(target);
        window
    }

    /// Drive toward `rect`, fully visible.
    pub fn set_target(&mut self, rect: Rect) {
        self.x.target = rect.x;
        self.y.target = rect.y;
        self.width.target = rect.width;
        self.height.target = rect.height;
        self.scale.target = 1.0;
        self.opacity.target = 1.0;
    }

    /// Drive toward a zero-size, transparent point at the centre of the
    /// current rect. Repeated calls keep the first hide target.
    pub fn hide(&mut self) {
        if self.is_hiding() {
            return;
        }
        let (cx, cy) = self.current_rect().center();
        self.x.target = cx;
        self.y.target = cy;
        self.width.target = 0.0;
        self.height.target = 0.0;
        self.scale.target = HIDDEN_SCALE;
        self.opacity.target = 0.0;
    }

    pub fn is_hiding(&self) -> bool {
        self.opacity.target == 0.0
    }

    pub fn current_rect(&self) -> Rect {
        Rect::new(
            self.x.current,
            self.y.current,
            self.width.current,
            self.height.current,
        )
    }

    pub fn target_rect(&self) -> Rect {
        Rect::new(
            self.x.target,
            self.y.target,
            self.width.target,
            self.height.target,
        )
    }

    pub fn is_settled(&self) -> bool {
        self.channels().iter().all(|c| c.is_settled())
    }

    /// Advance every channel by one tick.
    pub fn step(&mut self, engine: &AnimationEngine, dt: f64) {
        for channel in [&mut self.x, &mut self.y, &mut self.width, &mut self.height] {
            engine.step_channel(channel, dt, GEOMETRY_EPSILON);
        }
        for channel in [&mut self.scale, &mut self.opacity] {
            engine.step_channel(channel, dt, UNIT_EPSILON);
        }
    }

    /// The frame for the current state.
    pub fn frame(&self) -> WindowFrame {
        let opacity = self.opacity.current.clamp(0.0, 1.0);
        WindowFrame {
            rect: Rect::new(
                self.x.current.round(),
                self.y.current.round(),
                self.width.current.round().max(1.0),
                self.height.current.round().max(1.0),
            ),
            scale: self.scale.current,
            opacity,
            visible: opacity >= VISIBLE_OPACITY,
        }
    }

    /// The current frame if it differs enough from the last one handed
    /// out, recording it as applied.
    pub fn take_frame(&mut self) -> Option<WindowFrame> {
        let frame = self.frame();
        if let Some(last) = &self.last_applied {
            if !frame.differs_from(last) {
                return None;
            }
        }
        self.last_applied = Some(frame);
        Some(frame)
    }

    /// The host refused the last frame; the next `take_frame` hands out the
    /// current state even if nothing moved.
    pub fn forget_applied(&mut self) {
        self.last_applied = None;
    }

    fn channels(&self) -> [&Channel; 6] {
        [
            &self.x,
            &self.y,
            &self.width,
            &self.height,
            &self.scale,
            &self.opacity,
        ]
    }
}
