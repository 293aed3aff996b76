use dioxus::prelude::*;

/// Delay between the last query keystroke and the search it triggers.
pub const QUERY_DEBOUNCE_MS: u64 = 500;

/// Numbers each scheduled call so a settled timer can tell whether a newer
/// call has replaced it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generations {
    latest: u64,
}

impl Generations {
    /// Start a new generation, superseding every earlier one.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        self.latest == generation
    }
}

/// Wait `ms` milliseconds on the renderer's event loop.
async fn sleep_ms(ms: u64) {
    let script = format!("await new Promise((resolve) => setTimeout(resolve, {ms})); return null;");
    if let Err(err) = document::eval(&script).await {
        tracing::warn!(?err, "Debounce timer failed, running immediately");
    }
}

/// Runs only the last of a burst of calls, once `delay_ms` has passed
/// without another call.
#[derive(Clone, Copy)]
pub struct Debouncer {
    generations: Signal<Generations>,
    delay_ms: u64,
}

impl Debouncer {
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        let generation = self.generations.write().next();
        let generations = self.generations;
        let delay_ms = self.delay_ms;
        spawn(async move {
            sleep_ms(delay_ms).await;
            if generations.read().is_latest(generation) {
                action();
            }
        });
    }

    /// Drop whatever is pending.
    pub fn cancel(&mut self) {
        self.generations.write().next();
    }
}

pub fn use_debouncer(delay_ms: u64) -> Debouncer {
    let generations = use_signal(Generations::default);
    Debouncer {
        generations,
        delay_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_generation_is_latest() {
        let mut generations = Generations::default();
        let first = generations.next();
        let second = generations.next();
        assert!(!generations.is_latest(first));
        assert!(generations.is_latest(second));
    }

    #[test]
    fn nothing_is_latest_before_the_first_call() {
        let generations = Generations::default();
        assert!(!generations.is_latest(1));
    }
}
