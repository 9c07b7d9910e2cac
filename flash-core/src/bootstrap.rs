//! Bootstrap - einmalige Initialisierung vor dem Scheduler
//!
//! 1. LED initialisieren (aus)
//! 2. LED-Test: 3x blau blinken
//! 3. WiFi aufbauen (blockierend, begrenzte Versuche)
//! 4. Zeitstempel setzen, erster Fetch sofort

use embedded_hal_async::delay::DelayNs;

use crate::actuator::Signal;
use crate::event::Event;
use crate::scheduler::Scheduler;
use crate::traits::{Clock, DelaySource, EventSink, NetworkLink, SmartLedWriter};
use crate::types::LinkStatus;

impl<L, S, W, D, J> Scheduler<L, S, W, D, J>
where
    L: NetworkLink,
    S: DelaySource,
    W: SmartLedWriter,
    D: DelayNs,
    J: EventSink,
{
    /// Führt den Bootstrap aus und liefert den Link-Status danach
    ///
    /// Auch ohne WiFi geht es weiter: der Link-Check im Scheduler
    /// versucht es periodisch erneut.
    pub async fn bootstrap<C: Clock>(&mut self, clock: &C) -> LinkStatus {
        self.actuator.init();

        self.actuator
            .flash(Signal::On, &self.config.self_test, &mut self.delay)
            .await;
        self.journal.record(Event::SelfTestComplete);

        let status = self
            .supervisor
            .bring_up(
                &mut self.actuator,
                &mut self.delay,
                &mut self.journal,
                &self.config.bring_up,
                &self.config.success_flash,
                &self.config.error_flash,
            )
            .await;
        self.state.link_up = status.is_up();

        self.state.seed(clock.now_ms(), self.config.fetch_interval_ms);
        self.journal.record(Event::Ready {
            period: self.state.current_period,
            link: status,
        });

        status
    }
}
