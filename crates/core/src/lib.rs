// Domain types for the batch console REST client

pub mod schedule;
pub mod types;

pub use schedule::*;
pub use types::*;
