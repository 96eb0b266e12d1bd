pub mod journey;
pub mod term;
pub mod travel;
