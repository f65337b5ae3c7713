//! aero-gesture: hands-free gesture classification.
//!
//! Turns a stream of 21-point hand skeletons into a pointer with pinch
//! clicks and discrete gestures (rotation, fist closed/open, swipe).

pub mod arbiter;
pub mod config;
pub mod consumer;
pub mod engine;
pub mod history;
pub mod landmarks;
pub mod listener;
pub mod movement;
pub mod pointer;
pub mod pose;
pub mod replay;
pub mod rotation;
pub mod sexp;
pub mod swipe;
pub mod trace;

pub use arbiter::{ClickRequest, GestureChange, GestureEvent};
pub use config::GestureConfig;
pub use engine::{FrameReport, GestureEngine};
pub use landmarks::{HandLandmark, Landmark, LandmarkFrame};
pub use listener::{Disposition, GestureListener, ListenerId};
pub use pointer::{CursorMode, PointerState};
