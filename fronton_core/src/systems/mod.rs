pub mod collision;
pub mod movement;
pub mod scoring;
pub mod speed;

pub use collision::*;
pub use movement::*;
pub use scoring::*;
pub use speed::*;
