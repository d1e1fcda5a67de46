pub mod placement;
pub mod resume;
