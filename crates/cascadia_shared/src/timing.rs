use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

type TimerId = uuid::Uuid;

fn new_timer_id() -> TimerId {
    uuid::Uuid::new_v4()
}

/// A single measurement, started when it is created
#[derive(Debug, Clone)]
pub struct Timer {
    id: TimerId,
    context: Option<String>,
    start: Instant,
    elapsed: Option<Duration>,
}

impl Timer {
    #[must_use]
    pub fn new(context: Option<String>) -> Timer {
        Timer {
            id: new_timer_id(),
            context,
            start: Instant::now(),
            elapsed: None,
        }
    }

    pub fn stop(&mut self) {
        self.elapsed = Some(self.start.elapsed());
    }

    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.elapsed.is_some()
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.elapsed.map_or(0, |d| d.as_millis() as u64)
    }
}

/// Aggregated durations for one namespace
pub struct Stats {
    pub count: u64,
    pub total: u64,
    pub min: u64,
    pub max: u64,
    pub avg: u64,
}

/// Process-wide table of timers, grouped by namespace ("css.build" etc.).
/// Purely instrumentation; nothing in the parse output depends on it.
#[derive(Default, Debug, Clone)]
pub struct TimingTable {
    timers: HashMap<TimerId, Timer>,
    namespaces: HashMap<String, Vec<TimerId>>,
}

impl TimingTable {
    #[must_use]
    pub fn new() -> TimingTable {
        TimingTable::default()
    }

    pub fn start_timer(&mut self, namespace: &str, context: Option<String>) -> TimerId {
        let timer = Timer::new(context);
        let id = timer.id;
        self.timers.insert(id, timer);
        self.namespaces.entry(namespace.to_string()).or_default().push(id);

        id
    }

    pub fn stop_timer(&mut self, timer_id: TimerId) {
        if let Some(timer) = self.timers.get_mut(&timer_id) {
            timer.stop();
        }
    }

    #[must_use]
    pub fn duration(&self, timer_id: TimerId) -> u64 {
        self.timers.get(&timer_id).map_or(0, Timer::duration_ms)
    }

    #[must_use]
    pub fn get_stats(&self, timers: &[TimerId]) -> Stats {
        let mut durations: Vec<u64> = timers
            .iter()
            .filter_map(|id| self.timers.get(id))
            .filter(|timer| timer.has_finished())
            .map(Timer::duration_ms)
            .collect();

        durations.sort_unstable();
        let count = durations.len() as u64;
        let total = durations.iter().sum();
        Stats {
            count,
            total,
            min: durations.first().copied().unwrap_or(0),
            max: durations.last().copied().unwrap_or(0),
            avg: if count == 0 { 0 } else { total / count },
        }
    }

    pub fn print_timings(&self, show_details: bool) {
        println!("Namespace            |    Count |      Total |        Min |        Max |        Avg");
        println!("------------------------------------------------------------------------------------");
        for (namespace, timers) in &self.namespaces {
            let stats = self.get_stats(timers);
            println!(
                "{:20} | {:8} | {:8}ms | {:8}ms | {:8}ms | {:8}ms",
                namespace, stats.count, stats.total, stats.min, stats.max, stats.avg
            );

            if show_details {
                for id in timers {
                    if let Some(timer) = self.timers.get(id) {
                        if timer.has_finished() {
                            println!(
                                "  {:18} | {:8} | {:8}ms",
                                timer.context.clone().unwrap_or_default(),
                                1,
                                timer.duration_ms()
                            );
                        }
                    }
                }
            }
        }
    }
}

lazy_static! {
    pub static ref TIMING_TABLE: Mutex<TimingTable> = Mutex::new(TimingTable::default());
}

#[macro_export]
macro_rules! timing_start {
    ($namespace:expr, $context:expr) => {{
        $crate::timing::TIMING_TABLE
            .lock()
            .start_timer($namespace, Some($context.to_string()))
    }};

    ($namespace:expr) => {{
        $crate::timing::TIMING_TABLE.lock().start_timer($namespace, None)
    }};
}

#[macro_export]
macro_rules! timing_stop {
    ($timer_id:expr) => {{
        $crate::timing::TIMING_TABLE.lock().stop_timer($timer_id);
    }};
}
