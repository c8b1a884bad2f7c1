use crate::net::executor::NetExecutor;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::reducer::Reducer;
use crate::runtime::scheduler::Scheduler;
use crate::state::AppState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer;
use std::io;
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(120);

/// Single-threaded event loop. Terminal input, debounce timers and
/// network completions are all funneled through the reducer one at a
/// time, so state transitions never race.
pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    scheduler: Scheduler,
    executor: NetExecutor,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, executor: NetExecutor) -> Self {
        Self {
            state,
            terminal,
            scheduler: Scheduler::new(),
            executor,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit {
                self.process_scheduled_events()?;
                self.process_completions()?;

                let timeout = self.scheduler.poll_timeout(Instant::now(), IDLE_POLL);
                if self.terminal.poll(timeout)? {
                    let event = self.terminal.read_event()?;
                    self.dispatch_app_event(AppEvent::Terminal(event))?;
                } else {
                    // Quiet poll window: advance the spinner if anything
                    // is in flight.
                    self.process_command(Command::Tick)?;
                }
            }

            Ok(())
        })();

        // Outstanding workers keep running; dropping the executor with
        // `self` severs their channel so they can never touch state.
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_scheduled_events(&mut self) -> io::Result<()> {
        for event in self.scheduler.drain_ready(Instant::now()) {
            self.dispatch_app_event(event)?;
        }
        Ok(())
    }

    fn process_completions(&mut self) -> io::Result<()> {
        for completion in self.executor.drain_ready() {
            let effects = Reducer::apply_completion(&mut self.state, completion);
            self.apply_effects(effects)?;
        }
        Ok(())
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                self.process_command(Command::InputKey(key))
            }
            AppEvent::Terminal(TerminalEvent::Mouse(mouse)) => {
                self.process_command(Command::Pointer(mouse))
            }
            AppEvent::Terminal(TerminalEvent::Resize { width, height }) => {
                self.terminal.set_size(width, height);
                self.render()
            }
            AppEvent::Command(command) => self.process_command(command),
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Schedule(command) => {
                    self.scheduler.schedule(command, Instant::now());
                }
                Effect::SpawnSuggest { seq, query } => {
                    self.executor.spawn_suggest(seq, query);
                }
                Effect::SpawnWeather { seq, city } => {
                    self.executor.spawn_weather(seq, city);
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = renderer::render(&self.state);
        self.terminal.render(&frame.lines, frame.cursor)
    }
}
