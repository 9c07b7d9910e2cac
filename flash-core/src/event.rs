//! Diagnose-Events
//!
//! Der Core formatiert selbst keinen Text. Jede meldenswerte Situation wird
//! als [`Event`] an einen [`EventSink`](crate::traits::EventSink) übergeben,
//! die Firmware macht daraus Log-Zeilen.

use crate::error::FetchError;
use crate::types::LinkStatus;

/// Fehler-Taxonomie des Controllers
///
/// Alle Fehler werden lokal behandelt, keiner ist fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    LinkDown,
    LinkEstablishFailed,
    TransportError,
    ParseError,
    OutOfRangeValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// LED-Test nach dem Start abgeschlossen
    SelfTestComplete,
    /// Verbindungsaufbau beim Bootstrap gestartet
    LinkConnecting,
    LinkEstablished { attempts: u8 },
    LinkEstablishFailed { attempts: u8 },
    /// Verbindung war Up und ist weg
    LinkLost,
    /// Reconnect-Versuch eines Polls war erfolgreich
    LinkReconnected,
    /// Verbindung kam zwischen zwei Polls von selbst zurück
    LinkRestored,
    /// Fetch fällig, aber kein WiFi
    FetchSkipped,
    FetchFailed(FetchError),
    /// Server lieferte 0 oder kein `delay`
    PeriodDefaulted { period: u32 },
    PeriodClamped { raw: i64, period: u32 },
    PeriodChanged { from: u32, to: u32 },
    PeriodUnchanged { period: u32 },
    /// Bootstrap fertig, Scheduler startet
    Ready { period: u32, link: LinkStatus },
}

impl Event {
    /// Ordnet das Event der Fehler-Taxonomie zu (`None` = kein Fehler)
    pub const fn fault(&self) -> Option<Fault> {
        match self {
            // Ein übersprungener Fetch ist kein Fehler, der Link-Verlust
            // wurde schon als LinkLost gemeldet
            Event::LinkLost => Some(Fault::LinkDown),
            Event::LinkEstablishFailed { .. } => Some(Fault::LinkEstablishFailed),
            Event::FetchFailed(FetchError::Transport(_) | FetchError::Status(_)) => {
                Some(Fault::TransportError)
            }
            Event::FetchFailed(FetchError::Parse(_)) => Some(Fault::ParseError),
            Event::PeriodClamped { .. } => Some(Fault::OutOfRangeValue),
            _ => None,
        }
    }

    /// Übergang zurück nach Up im laufenden Betrieb
    pub const fn is_link_recovery(&self) -> bool {
        matches!(self, Event::LinkReconnected | Event::LinkRestored)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Fault {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Fault::LinkDown => defmt::write!(fmt, "LinkDown"),
            Fault::LinkEstablishFailed => defmt::write!(fmt, "LinkEstablishFailed"),
            Fault::TransportError => defmt::write!(fmt, "TransportError"),
            Fault::ParseError => defmt::write!(fmt, "ParseError"),
            Fault::OutOfRangeValue => defmt::write!(fmt, "OutOfRangeValue"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Event::SelfTestComplete => defmt::write!(fmt, "SelfTestComplete"),
            Event::LinkConnecting => defmt::write!(fmt, "LinkConnecting"),
            Event::LinkEstablished { attempts } => {
                defmt::write!(fmt, "LinkEstablished {{ attempts: {} }}", attempts)
            }
            Event::LinkEstablishFailed { attempts } => {
                defmt::write!(fmt, "LinkEstablishFailed {{ attempts: {} }}", attempts)
            }
            Event::LinkLost => defmt::write!(fmt, "LinkLost"),
            Event::LinkReconnected => defmt::write!(fmt, "LinkReconnected"),
            Event::LinkRestored => defmt::write!(fmt, "LinkRestored"),
            Event::FetchSkipped => defmt::write!(fmt, "FetchSkipped"),
            Event::FetchFailed(e) => defmt::write!(fmt, "FetchFailed({})", e),
            Event::PeriodDefaulted { period } => {
                defmt::write!(fmt, "PeriodDefaulted {{ period: {} }}", period)
            }
            Event::PeriodClamped { raw, period } => {
                defmt::write!(fmt, "PeriodClamped {{ raw: {}, period: {} }}", raw, period)
            }
            Event::PeriodChanged { from, to } => {
                defmt::write!(fmt, "PeriodChanged {{ {}ms -> {}ms }}", from, to)
            }
            Event::PeriodUnchanged { period } => {
                defmt::write!(fmt, "PeriodUnchanged {{ period: {} }}", period)
            }
            Event::Ready { period, link } => {
                defmt::write!(fmt, "Ready {{ period: {}, link: {} }}", period, link)
            }
        }
    }
}
