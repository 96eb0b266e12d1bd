pub mod flights;
pub mod not_travelling;
pub mod transport_legs;
