//! Platform-free animation logic.
//!
//! Nothing here references `web_sys`; the wasm front-end supplies geometry and
//! a drawing surface through the traits in `geometry` and `surface`.

pub mod config;
pub mod door;
pub mod easing;
pub mod geometry;
pub mod line;
pub mod progress;
pub mod scene;
pub mod surface;
pub mod wave;

pub use config::*;
pub use geometry::*;
pub use progress::*;
pub use scene::*;
pub use surface::*;
pub use wave::*;
