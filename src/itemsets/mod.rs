pub mod candidates;
pub mod index;
