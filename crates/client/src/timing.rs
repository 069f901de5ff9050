use std::time::Duration;

/// Debounce window for the user search box.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// How long success and error banners stay on the users screen.
pub const BANNER_TIMEOUT: Duration = Duration::from_millis(5000);

/// Runtime-appropriate async sleep.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Latest-wins ticket counter. Each new input takes a ticket; after the
/// delay only the holder of the newest ticket acts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn next(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Wait out `delay`, then report whether `ticket` is still the newest one
/// handed out by the debouncer `latest` reads.
pub async fn debounced(delay: Duration, ticket: u64, latest: impl Fn() -> Debounce) -> bool {
    sleep(delay).await;
    latest().is_current(ticket)
}
