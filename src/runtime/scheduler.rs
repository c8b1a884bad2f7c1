use crate::runtime::event::AppEvent;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    /// Emit `event` after `delay` of quiet on `key`; scheduling again on
    /// the same key supersedes the pending emission.
    Debounce {
        key: String,
        delay: Duration,
        event: AppEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    guard: Guard,
    event: AppEvent,
}

/// Single-threaded timer queue for the event loop. Superseded or
/// cancelled tasks stay in the queue but fail their version check at
/// drain time, so they never fire.
#[derive(Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::Debounce { key, delay, event } => {
                let version = self.bump_version(&key);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut ready = Vec::new();
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                if self.task_is_valid(&task) {
                    ready.push(task.event);
                }
            } else {
                idx += 1;
            }
        }
        ready
    }

    /// How long the loop may block waiting for terminal input before a
    /// pending timer comes due.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;
        for task in &self.delayed {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }
        next
    }

    fn task_is_valid(&self, task: &DelayedTask) -> bool {
        let current = *self.key_versions.get(&task.guard.key).unwrap_or(&0);
        current == task.guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::{Scheduler, SchedulerCommand};
    use crate::runtime::command::Command;
    use crate::runtime::event::AppEvent;
    use std::time::{Duration, Instant};

    fn debounce(key: &str, delay_ms: u64) -> SchedulerCommand {
        SchedulerCommand::Debounce {
            key: key.to_string(),
            delay: Duration::from_millis(delay_ms),
            event: AppEvent::Command(Command::RunSuggestLookup),
        }
    }

    #[test]
    fn debounce_emits_after_the_quiet_period() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        scheduler.schedule(debounce("suggest", 300), start);

        assert!(
            scheduler
                .drain_ready(start + Duration::from_millis(299))
                .is_empty()
        );
        assert_eq!(
            scheduler
                .drain_ready(start + Duration::from_millis(300))
                .len(),
            1
        );
    }

    #[test]
    fn rapid_rescheduling_fires_only_the_last_task() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        for tick in 0..5u64 {
            scheduler.schedule(debounce("suggest", 300), start + Duration::from_millis(tick * 50));
        }

        // Well past every deadline: exactly one emission survives.
        let ready = scheduler.drain_ready(start + Duration::from_secs(2));
        assert_eq!(ready.len(), 1);
    }

    #[test]
    fn cancel_silences_the_pending_task() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        scheduler.schedule(debounce("suggest", 300), start);
        scheduler.schedule(
            SchedulerCommand::Cancel {
                key: "suggest".to_string(),
            },
            start + Duration::from_millis(100),
        );

        assert!(scheduler.drain_ready(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn poll_timeout_shrinks_to_the_nearest_deadline() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let default = Duration::from_millis(120);

        assert_eq!(scheduler.poll_timeout(start, default), default);

        scheduler.schedule(debounce("suggest", 40), start);
        assert!(scheduler.poll_timeout(start, default) <= Duration::from_millis(40));
    }

    #[test]
    fn keys_are_independent() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        scheduler.schedule(debounce("suggest", 100), start);
        scheduler.schedule(debounce("other", 100), start);
        scheduler.schedule(
            SchedulerCommand::Cancel {
                key: "other".to_string(),
            },
            start,
        );

        assert_eq!(scheduler.drain_ready(start + Duration::from_secs(1)).len(), 1);
    }
}
