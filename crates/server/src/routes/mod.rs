pub mod flight;
pub mod health;
pub mod journey;
pub mod not_travelling;
pub mod root;
pub mod term;
pub mod todo;
pub mod transport;
