mod encoder;
mod types;

pub use encoder::*;
pub use types::*;
