pub mod command;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runner;
pub mod scheduler;

pub use command::Command;
pub use effect::Effect;
pub use event::AppEvent;
pub use reducer::Reducer;
pub use runner::Runtime;
pub use scheduler::{Scheduler, SchedulerCommand};
