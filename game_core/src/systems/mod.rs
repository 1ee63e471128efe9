pub mod collision;
pub mod input;
pub mod movement;
pub mod particles;
pub mod scoring;
pub mod starfield;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use particles::*;
pub use scoring::*;
pub use starfield::*;
