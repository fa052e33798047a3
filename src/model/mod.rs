pub mod filter;
pub mod project;
pub mod status;
pub mod store;
pub mod task;

pub use project::Project;
pub use status::Status;
pub use store::Store;
pub use task::Task;
