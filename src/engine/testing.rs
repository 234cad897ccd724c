//! Scripted provider for engine, handler, and sweep tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::domain::TravelOutcome;
use crate::engine::TravelTimeProvider;

/// Answers by destination address; unknown destinations get a transport error.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    outcomes: HashMap<String, TravelOutcome>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, destination: &str, outcome: TravelOutcome) -> Self {
        self.outcomes.insert(destination.to_string(), outcome);
        self
    }

    pub(crate) fn with_delay(mut self, destination: &str, delay: Duration) -> Self {
        self.delays.insert(destination.to_string(), delay);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl TravelTimeProvider for ScriptedProvider {
    fn travel_time(&self, origin: &str, destination: &str) -> TravelOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((origin.to_string(), destination.to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(destination) {
            thread::sleep(*delay);
        }
        let outcome = self
            .outcomes
            .get(destination)
            .cloned()
            .unwrap_or_else(|| TravelOutcome::transport("no scripted outcome"));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
