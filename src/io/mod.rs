pub mod file;

pub use file::{load_store, save_store};
