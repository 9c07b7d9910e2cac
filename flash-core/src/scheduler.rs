//! Kooperativer Scheduler
//!
//! Eine einzige Schleife prüft bei jedem Tick drei unabhängige Timer:
//!
//! | Task          | Intervall                   |
//! |---------------|-----------------------------|
//! | Link-Check    | `link_check_interval_ms`    |
//! | API-Fetch     | `fetch_interval_ms`         |
//! | LED-Toggle    | `current_period` (variabel) |
//!
//! Ist ein Task fällig, wird zuerst sein Zeitstempel auf `now` gesetzt und
//! erst dann der Task aufgerufen. Tasks laufen strikt nacheinander, deshalb
//! braucht [`ScheduleState`] keine Locks. Ein Fehler in einem Task hält die
//! anderen beiden nie auf.

use embedded_hal_async::delay::DelayNs;

use crate::actuator::{Actuator, Palette};
use crate::config::ControllerConfig;
use crate::error::ConfigError;
use crate::event::Event;
use crate::fetcher::{Fetched, Fetcher, PeriodUpdate};
use crate::logic::Adjustment;
use crate::supervisor::Supervisor;
use crate::traits::{Clock, DelaySource, EventSink, NetworkLink, SmartLedWriter};
use crate::types::{Credentials, LinkStatus};

/// Gemeinsamer Zustand, gehört dem Scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleState {
    pub last_link_check: u64,
    pub last_fetch: u64,
    pub last_toggle: u64,
    /// Blink-Periode in ms, immer innerhalb `[min, max]`
    pub current_period: u32,
    /// Nur der LED-Toggle schreibt hier
    pub output_phase: bool,
    /// Spiegelt den Status des Supervisors, Vorbedingung für den Fetch
    pub link_up: bool,
}

impl ScheduleState {
    pub const fn new(default_period: u32) -> Self {
        Self {
            last_link_check: 0,
            last_fetch: 0,
            last_toggle: 0,
            current_period: default_period,
            output_phase: false,
            link_up: false,
        }
    }

    /// Startwerte nach dem Bootstrap
    ///
    /// `last_fetch` liegt ein Intervall in der Vergangenheit, damit gleich
    /// der erste Tick die Periode abfragt.
    pub fn seed(&mut self, now: u64, fetch_interval_ms: u32) {
        self.last_toggle = now;
        self.last_link_check = now;
        self.last_fetch = now.wrapping_sub(u64::from(fetch_interval_ms));
    }
}

/// Welche Tasks in einem Tick gelaufen sind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub link_checked: bool,
    /// Fetcher wurde tatsächlich aufgerufen
    pub fetched: bool,
    /// Fetch war fällig, aber kein WiFi
    pub fetch_skipped: bool,
    pub toggled: bool,
}

/// Alle Collaborators, die der Scheduler besitzt
pub struct Parts<L, S, W, D, J> {
    pub link: L,
    pub source: S,
    pub led: W,
    pub delay: D,
    pub journal: J,
}

pub struct Scheduler<L, S, W, D, J> {
    pub(crate) config: ControllerConfig,
    pub(crate) state: ScheduleState,
    pub(crate) supervisor: Supervisor<L>,
    pub(crate) fetcher: Fetcher<S>,
    pub(crate) actuator: Actuator<W>,
    pub(crate) delay: D,
    pub(crate) journal: J,
}

/// Ist seit `last` mindestens `interval_ms` vergangen?
///
/// Wrapping-Subtraktion, damit ein in die Vergangenheit gelegter
/// Zeitstempel auch bei `now < interval` funktioniert.
fn due(now: u64, last: u64, interval_ms: u32) -> bool {
    now.wrapping_sub(last) >= u64::from(interval_ms)
}

impl<L, S, W, D, J> Scheduler<L, S, W, D, J>
where
    L: NetworkLink,
    S: DelaySource,
    W: SmartLedWriter,
    D: DelayNs,
    J: EventSink,
{
    pub fn new(
        config: ControllerConfig,
        credentials: Credentials,
        palette: Palette,
        parts: Parts<L, S, W, D, J>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: ScheduleState::new(config.limits.default),
            supervisor: Supervisor::new(parts.link, credentials),
            fetcher: Fetcher::new(parts.source, config.limits),
            actuator: Actuator::new(parts.led, palette),
            delay: parts.delay,
            journal: parts.journal,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn link_status(&self) -> LinkStatus {
        self.supervisor.status()
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut J {
        &mut self.journal
    }

    /// Ein Durchlauf der Scheduler-Schleife
    ///
    /// Reihenfolge: Link-Check → Fetch → LED-Toggle.
    pub async fn tick(&mut self, now: u64) -> TickReport {
        let mut report = TickReport::default();

        // Task 1: WiFi-Verbindung prüfen
        if due(now, self.state.last_link_check, self.config.link_check_interval_ms) {
            self.state.last_link_check = now;
            report.link_checked = true;

            let was_up = self.state.link_up;
            let status = self
                .supervisor
                .poll(
                    &mut self.delay,
                    &mut self.journal,
                    self.config.bring_up.reconnect_settle_ms,
                )
                .await;
            self.state.link_up = status.is_up();

            // Wieder online: sofort fetchen statt bis zum nächsten Intervall warten
            if !was_up && self.state.link_up {
                self.state.last_fetch = now.wrapping_sub(u64::from(self.config.fetch_interval_ms));
            }
        }

        // Task 2: Periode von der API holen
        if due(now, self.state.last_fetch, self.config.fetch_interval_ms) {
            self.state.last_fetch = now;

            if self.state.link_up {
                report.fetched = true;
                match self.fetcher.fetch(self.state.current_period).await {
                    Ok(fetched) => self.apply(&fetched),
                    Err(e) => self.journal.record(Event::FetchFailed(e)),
                }
            } else {
                report.fetch_skipped = true;
                self.journal.record(Event::FetchSkipped);
            }
        }

        // Task 3: LED umschalten
        if due(now, self.state.last_toggle, self.state.current_period) {
            self.state.last_toggle = now;
            report.toggled = true;
            self.actuator.toggle_output(&mut self.state);
        }

        report
    }

    /// Übernimmt einen validierten Wert und meldet was passiert ist
    fn apply(&mut self, fetched: &Fetched) {
        match fetched.adjustment {
            Adjustment::None => {}
            Adjustment::Defaulted => self.journal.record(Event::PeriodDefaulted {
                period: fetched.period,
            }),
            Adjustment::Clamped { raw } => self.journal.record(Event::PeriodClamped {
                raw,
                period: fetched.period,
            }),
        }

        match fetched.update {
            PeriodUpdate::Unchanged(period) => {
                self.journal.record(Event::PeriodUnchanged { period });
            }
            PeriodUpdate::Changed { from, to } => {
                self.state.current_period = to;
                self.journal.record(Event::PeriodChanged { from, to });
            }
        }
    }

    /// Endlos-Schleife nach dem Bootstrap
    ///
    /// Zwischen zwei Ticks wird nur an den Executor zurückgegeben (kein
    /// Timer), damit der Netzwerk-Stack weiterlaufen kann.
    pub async fn run<C: Clock>(&mut self, clock: &C) -> ! {
        loop {
            self.tick(clock.now_ms()).await;
            embassy_futures::yield_now().await;
        }
    }
}
