// Monotone Zeitquelle für den Scheduler
use embassy_time::Instant;
use flash_core::Clock;

/// Millisekunden seit Boot aus dem embassy-time Treiber
///
/// Läuft erst nach rund 584 Mio. Jahren über, der Scheduler rechnet
/// trotzdem mit `wrapping_sub`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
