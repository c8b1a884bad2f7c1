use crate::net::executor::NetCompletion;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::scheduler::SchedulerCommand;
use crate::search::SearchOutcome;
use crate::state::AppState;
use crate::suggest::{DEBOUNCE, DEBOUNCE_KEY, MIN_QUERY_LEN};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseKind};
use crate::ui::renderer::{HitTarget, hit_test};

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.should_exit = true;
                Vec::new()
            }
            Command::InputKey(key) => Self::reduce_key(state, key),
            Command::Pointer(mouse) => Self::reduce_pointer(state, mouse),
            Command::RunSuggestLookup => Self::run_suggest_lookup(state),
            Command::Tick => {
                if !state.any_loading() {
                    return Vec::new();
                }
                state.spinner.tick();
                vec![Effect::RequestRender]
            }
        }
    }

    /// Network completions flow through here; stale sequence numbers are
    /// rejected before they can touch any state.
    pub fn apply_completion(state: &mut AppState, completion: NetCompletion) -> Vec<Effect> {
        match completion {
            NetCompletion::Suggestions { seq, suggestions } => {
                if !state.fetcher.accept(seq) {
                    return Vec::new();
                }
                state.search.apply_suggestions(suggestions);
                vec![Effect::RequestRender]
            }
            NetCompletion::Weather { seq, result } => {
                if !state.weather.accept(seq) {
                    return Vec::new();
                }
                state.weather.resolve(result);
                vec![Effect::RequestRender]
            }
        }
    }

    fn reduce_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Self::reduce(state, Command::Exit);
        }
        let outcome = state.search.on_key(key);
        Self::apply_outcome(state, outcome)
    }

    fn reduce_pointer(state: &mut AppState, mouse: MouseEvent) -> Vec<Effect> {
        let outcome = match (mouse.kind, hit_test(state, mouse.row)) {
            (MouseKind::Moved, HitTarget::Suggestion(index)) => state.search.hover(index),
            (MouseKind::Down, HitTarget::Suggestion(index)) => state.search.click(index),
            (MouseKind::Down, HitTarget::Outside) => state.search.focus_lost(),
            _ => SearchOutcome::Ignored,
        };
        Self::apply_outcome(state, outcome)
    }

    fn apply_outcome(state: &mut AppState, outcome: SearchOutcome) -> Vec<Effect> {
        match outcome {
            SearchOutcome::Ignored => Vec::new(),
            SearchOutcome::Changed => vec![Effect::RequestRender],
            SearchOutcome::QueryChanged => Self::query_changed(state),
            SearchOutcome::Committed(city) => Self::committed(state, city),
        }
    }

    /// Keystroke path: every edit re-arms the debounce timer; shrinking
    /// below the minimum drops the list and any pending or in-flight
    /// lookup immediately.
    fn query_changed(state: &mut AppState) -> Vec<Effect> {
        let mut effects = Vec::new();
        if state.search.query().chars().count() < MIN_QUERY_LEN {
            state.fetcher.cancel();
            state.search.clear_suggestions();
            effects.push(Effect::Schedule(SchedulerCommand::Cancel {
                key: DEBOUNCE_KEY.to_string(),
            }));
        } else {
            effects.push(Effect::Schedule(SchedulerCommand::Debounce {
                key: DEBOUNCE_KEY.to_string(),
                delay: DEBOUNCE,
                event: AppEvent::Command(Command::RunSuggestLookup),
            }));
        }
        effects.push(Effect::RequestRender);
        effects
    }

    /// The debounce timer fired: the query survived the quiet period.
    fn run_suggest_lookup(state: &mut AppState) -> Vec<Effect> {
        let query = state.search.query().to_string();
        match state.fetcher.begin(&query) {
            Some(seq) => vec![Effect::SpawnSuggest { seq, query }, Effect::RequestRender],
            None => {
                state.search.clear_suggestions();
                vec![Effect::RequestRender]
            }
        }
    }

    /// Commit callback: the host reaction to a chosen city is the
    /// weather fetch. Any autocomplete interest dies with the commit.
    fn committed(state: &mut AppState, city: String) -> Vec<Effect> {
        state.fetcher.cancel();
        let seq = state.weather.begin(&city);
        vec![
            Effect::Schedule(SchedulerCommand::Cancel {
                key: DEBOUNCE_KEY.to_string(),
            }),
            Effect::SpawnWeather { seq, city },
            Effect::RequestRender,
        ]
    }
}
