// Diagnose-Log: schreibt Controller-Events über defmt auf die serielle Konsole
use defmt::{debug, error, info, warn};
use flash_core::{Event, EventSink};

/// `EventSink` für die Firmware
///
/// Jede Zeile trägt das Subsystem als Präfix (`WiFi:`, `API:`, `LED:`,
/// `SYSTEM:`), wie die übrigen Logs der Firmware. Fehler-Events gehen
/// als `warn`/`error` raus, zusammen mit ihrer Kategorie.
#[derive(Debug, Default)]
pub struct DefmtJournal;

impl EventSink for DefmtJournal {
    fn record(&mut self, event: Event) {
        match event {
            Event::SelfTestComplete => info!("LED: Self-test complete"),
            Event::LinkConnecting => info!("WiFi: Connecting..."),
            Event::LinkEstablished { attempts } => {
                info!("WiFi: Connected after {} checks", attempts)
            }
            Event::LinkEstablishFailed { attempts } => error!(
                "WiFi: Giving up after {} checks, continuing offline",
                attempts
            ),
            Event::LinkLost => warn!("WiFi: Connection lost, reconnecting..."),
            Event::LinkReconnected => info!("WiFi: Reconnected"),
            Event::LinkRestored => info!("WiFi: Connection restored"),
            Event::FetchSkipped => info!("API: WiFi not connected, skipping fetch"),
            Event::FetchFailed(e) => warn!("API: Fetch failed: {}", e),
            Event::PeriodDefaulted { period } => {
                info!("API: No delay from server, using default {} ms", period)
            }
            Event::PeriodClamped { raw, period } => {
                warn!("API: Delay {} out of range, clamped to {} ms", raw, period)
            }
            Event::PeriodChanged { from, to } => {
                info!("API: Blink period changed {} ms -> {} ms", from, to)
            }
            Event::PeriodUnchanged { period } => {
                info!("API: Blink period unchanged ({} ms)", period)
            }
            Event::Ready { period, link } => {
                info!("SYSTEM: Ready (period {} ms, WiFi {})", period, link)
            }
        }

        if let Some(fault) = event.fault() {
            debug!("SYSTEM: fault category {}", fault);
        }
    }
}
