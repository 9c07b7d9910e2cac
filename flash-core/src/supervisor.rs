//! Connectivity Supervisor
//!
//! Baut die WiFi-Verbindung auf und hält sie am Leben:
//! - `bring_up()`: einmalig beim Bootstrap, blockierend mit begrenzter Anzahl Versuche
//! - `poll()`: vom Scheduler alle paar Sekunden, höchstens eine kurze Wartezeit
//!
//! Zustände: Down → Connecting → Up, Up → Down bei Verbindungsverlust.

use embedded_hal_async::delay::DelayNs;

use crate::actuator::{Actuator, Signal};
use crate::config::{BlinkPattern, BringUpConfig};
use crate::event::Event;
use crate::traits::{EventSink, NetworkLink, SmartLedWriter};
use crate::types::{Credentials, LinkStatus};

pub struct Supervisor<L> {
    link: L,
    credentials: Credentials,
    status: LinkStatus,
}

impl<L: NetworkLink> Supervisor<L> {
    pub fn new(link: L, credentials: Credentials) -> Self {
        Self {
            link,
            credentials,
            status: LinkStatus::Down,
        }
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Verbindungsaufbau beim Bootstrap
    ///
    /// Wartet bis zu `attempts * attempt_wait_ms` auf die Verbindung und
    /// zeigt den Fortschritt auf der LED:
    /// - Orange/Aus blinkend während des Wartens
    /// - Grün blinkend bei Erfolg
    /// - Rot blinkend wenn alle Versuche aufgebraucht sind
    ///
    /// Ein Fehlschlag ist nicht fatal, `poll()` versucht es später erneut.
    pub async fn bring_up<W, D, J>(
        &mut self,
        actuator: &mut Actuator<W>,
        delay: &mut D,
        journal: &mut J,
        config: &BringUpConfig,
        success_flash: &BlinkPattern,
        error_flash: &BlinkPattern,
    ) -> LinkStatus
    where
        W: SmartLedWriter,
        D: DelayNs,
        J: EventSink,
    {
        self.status = LinkStatus::Connecting;
        journal.record(Event::LinkConnecting);
        actuator.show(Signal::Connecting);

        // Ein abgelehnter Request wird hier nicht gesondert behandelt:
        // die Warteschleife unten endet dann eben ohne Verbindung.
        let _ = self.link.begin(&self.credentials).await;

        let mut attempts: u8 = 0;
        while !self.link.is_connected() && attempts < config.attempts {
            delay.delay_ms(config.attempt_wait_ms).await;
            attempts += 1;

            if attempts % 2 == 0 {
                actuator.show(Signal::Connecting);
            } else {
                actuator.show(Signal::Off);
            }
        }

        if self.link.is_connected() {
            self.status = LinkStatus::Up;
            journal.record(Event::LinkEstablished { attempts });
            actuator.flash(Signal::Success, success_flash, delay).await;
        } else {
            self.status = LinkStatus::Down;
            journal.record(Event::LinkEstablishFailed { attempts });
            actuator.flash(Signal::Error, error_flash, delay).await;
        }

        self.status
    }

    /// Periodische Prüfung durch den Scheduler
    ///
    /// - Up und verbunden: nur bestätigen
    /// - nicht verbunden: genau ein Reconnect-Versuch mit kurzer Wartezeit
    /// - verbunden, aber Status nicht Up: Verbindung kam zwischen zwei
    ///   Polls zurück → Up
    pub async fn poll<D, J>(&mut self, delay: &mut D, journal: &mut J, settle_ms: u32) -> LinkStatus
    where
        D: DelayNs,
        J: EventSink,
    {
        if !self.link.is_connected() {
            if self.status == LinkStatus::Up {
                journal.record(Event::LinkLost);
            }
            self.status = LinkStatus::Connecting;

            self.link.disconnect().await;
            let _ = self.link.begin(&self.credentials).await;
            delay.delay_ms(settle_ms).await;

            if self.link.is_connected() {
                self.status = LinkStatus::Up;
                journal.record(Event::LinkReconnected);
            } else {
                self.status = LinkStatus::Down;
            }
        } else if self.status != LinkStatus::Up {
            self.status = LinkStatus::Up;
            journal.record(Event::LinkRestored);
        }

        self.status
    }
}
