mod fetch;
mod sequence;
mod tracked;

pub use fetch::*;
pub use sequence::*;
pub use tracked::*;
