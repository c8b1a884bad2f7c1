pub mod config;
pub mod net;
pub mod runtime;
pub mod search;
pub mod state;
pub mod suggest;
pub mod terminal;
pub mod ui;
