//! Data transfer objects for presentation layers

mod responses;

pub use responses::ActivityEntry;
