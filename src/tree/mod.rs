pub mod entity;
pub mod node;
pub mod parsed;

pub use entity::*;
pub use node::*;
pub use parsed::*;
