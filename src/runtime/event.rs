use crate::runtime::command::Command;
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    Command(Command),
}
