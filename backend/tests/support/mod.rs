#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::{json, Value};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including unwinds) and serializes
/// access to the process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Raw ticket record as the dashboard submits it.
pub fn ticket(id: i64, status: &str, priority: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "priority": priority,
        "created_at": created_at,
        "subject": format!("Ticket {}", id),
    })
}

/// `per_day[i]` tickets on day `i` after `start_day` of March 2024, all at 09:00 UTC.
pub fn daily_batch(start_day: u32, per_day: &[usize]) -> Vec<Value> {
    let mut records = Vec::new();
    let mut id = 1;
    for (offset, &count) in per_day.iter().enumerate() {
        for _ in 0..count {
            let created_at = format!("2024-03-{:02}T09:00:00Z", start_day + offset as u32);
            records.push(ticket(id, "open", "normal", &created_at));
            id += 1;
        }
    }
    records
}
