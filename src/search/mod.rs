pub mod controller;
pub mod text_edit;

pub use controller::{SearchController, SearchOutcome};
