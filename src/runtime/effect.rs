use crate::runtime::scheduler::SchedulerCommand;

/// Side effects the reducer asks the runtime to perform. The reducer
/// itself only mutates `AppState`; timers and network work happen here.
#[derive(Debug, Clone)]
pub enum Effect {
    Schedule(SchedulerCommand),
    SpawnSuggest { seq: u64, query: String },
    SpawnWeather { seq: u64, city: String },
    RequestRender,
}
