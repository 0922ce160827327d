pub mod label;
pub mod segment;
pub mod turn;

pub use label::*;
pub use segment::*;
pub use turn::*;
