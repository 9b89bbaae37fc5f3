pub mod decrypt;
pub mod encrypt;

pub use decrypt::*;
pub use encrypt::*;
