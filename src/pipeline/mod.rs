//! Pipeline module - batch orchestration over the browser session

pub mod batch;
pub mod research;

pub use batch::BatchRunner;
pub use research::ExecutiveSearch;
