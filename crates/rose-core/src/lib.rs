pub mod camera;
pub mod constants;
pub mod error;
pub mod forest;
pub mod frame;
pub mod instance;
pub mod interaction;
pub mod particles;
pub mod petal;
pub mod phyllotaxis;
pub mod scene;
pub mod theme;
pub mod transform;
pub mod tree;

pub use camera::*;
pub use constants::*;
pub use error::{Result, RoseError};
pub use forest::*;
pub use frame::*;
pub use instance::*;
pub use interaction::*;
pub use particles::*;
pub use petal::*;
pub use phyllotaxis::*;
pub use scene::*;
pub use theme::*;
pub use transform::*;
pub use tree::*;
