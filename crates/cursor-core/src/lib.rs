//! Platform-free engine behind the animated cursor.
//!
//! Nothing here touches a browser API: pointer input, element lookup, frame
//! scheduling and drawing all arrive through the traits in [`surface`],
//! [`scheduler`] and [`renderer`], so the whole engine runs on the host.

pub mod config;
pub mod constants;
pub mod controller;
pub mod interaction;
pub mod lease;
pub mod render_loop;
pub mod renderer;
pub mod sampler;
pub mod scheduler;
pub mod smoothing;
pub mod surface;
pub mod trail;
pub mod visual;

pub use config::*;
pub use controller::*;
pub use interaction::*;
pub use lease::*;
pub use render_loop::*;
pub use renderer::*;
pub use sampler::*;
pub use scheduler::*;
pub use smoothing::SmoothedState;
pub use surface::*;
pub use trail::*;
pub use visual::{BlendMode, VisualState};
