pub mod camera;
pub mod collide;
pub mod constants;
pub mod focus;
pub mod panels;
pub mod project;
pub mod scene;
pub mod spring;
pub mod state;

pub use camera::*;
pub use collide::*;
pub use constants::*;
pub use focus::*;
pub use panels::*;
pub use project::*;
pub use scene::*;
pub use spring::*;
pub use state::*;
