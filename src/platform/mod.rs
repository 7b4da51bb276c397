//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame time
//! - Input events
//! - Fatal startup errors

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    R,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            " " => Key::Space,
            "r" | "R" => Key::R,
            _ => Key::Other,
        }
    }
}

/// Discrete event delivered to the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    WindowClosed,
    KeyPressed(Key),
}

/// Frame clock
pub trait Clock {
    /// Seconds since the previous call (or since creation)
    fn restart(&mut self) -> f32;
}

/// Per-frame event source
pub trait EventSource {
    /// Drain the events received since the last poll, oldest first
    fn poll_events(&mut self) -> Vec<FrameEvent>;
}

/// Clock that always reports the same step
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn restart(&mut self) -> f32 {
        self.step
    }
}

/// Browser clock backed by `performance.now()` (milliseconds)
#[cfg(target_arch = "wasm32")]
pub struct PerformanceClock {
    performance: web_sys::Performance,
    last_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new(performance: web_sys::Performance) -> Self {
        let last_ms = performance.now();
        Self {
            performance,
            last_ms,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn restart(&mut self) -> f32 {
        let now = self.performance.now();
        let elapsed = ((now - self.last_ms) / 1000.0).max(0.0) as f32;
        self.last_ms = now;
        elapsed
    }
}

/// Shared FIFO of events, fed by input callbacks and drained once per frame
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<FrameEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: FrameEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl EventSource for EventQueue {
    fn poll_events(&mut self) -> Vec<FrameEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }
}

/// Fatal failure while setting up presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// A required page element is missing
    MissingElement { id: &'static str },
    /// A page element exists but has the wrong type
    WrongElementType { id: &'static str, expected: &'static str },
    /// The browser window or document is unavailable
    NoWindow,
    /// Rendering surface could not be created
    Surface(String),
    /// No compatible GPU adapter
    NoAdapter(String),
    /// GPU device request failed
    Device(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { id } => write!(f, "required element #{id} not found"),
            Self::WrongElementType { id, expected } => {
                write!(f, "element #{id} is not a {expected}")
            }
            Self::NoWindow => write!(f, "no browser window/document"),
            Self::Surface(msg) => write!(f, "failed to create surface: {msg}"),
            Self::NoAdapter(msg) => write!(f, "no GPU adapter: {msg}"),
            Self::Device(msg) => write!(f, "failed to create GPU device: {msg}"),
        }
    }
}

impl std::error::Error for StartupError {}
