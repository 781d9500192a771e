mod encoder;
mod galois;

pub use encoder::*;
pub use galois::GF;
