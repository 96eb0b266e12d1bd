pub mod catalog;
pub mod journey;
pub mod summary;
pub mod term;
pub mod todo;
pub mod travel;
