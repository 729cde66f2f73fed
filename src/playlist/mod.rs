pub mod dataset;
pub mod range;
pub mod resolver;


pub use dataset::*;
pub use range::*;
pub use resolver::*;
