//! Scroll progress to camera pose timeline for the glove showcase site.
//!
//! Nothing here touches a platform API: the web frontend supplies a scroll
//! driven [`ProgressSource`] and a [`CameraSink`] wrapping the page's camera,
//! the native preview uses [`ProgressSignal`] and [`PerspectiveCamera`].

pub mod camera;
pub mod config;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod error;
pub mod pose;
pub mod signal;
pub mod timeline;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use easing::*;
pub use engine::*;
pub use error::*;
pub use pose::*;
pub use signal::*;
pub use timeline::*;
