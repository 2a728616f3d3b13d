pub mod ready;

pub use ready::*;
