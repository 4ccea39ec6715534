//! Harvester core logic

pub mod driver;
pub mod merger;
pub mod projector;

pub use driver::CycleDriver;
pub use merger::merge;
pub use projector::project;
