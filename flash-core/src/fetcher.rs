//! Parameter Fetcher
//!
//! Holt die Blink-Periode vom API-Endpunkt und validiert sie.
//! Der Fetcher selbst ändert keinen Zustand, das Ergebnis wird vom
//! Scheduler übernommen.

use crate::config::PeriodLimits;
use crate::error::FetchError;
use crate::logic::{Adjustment, assess_period, parse_delay};
use crate::traits::DelaySource;

/// Größe des Body-Buffers (Antwort ist ein kleines JSON-Objekt)
pub const BODY_CAPACITY: usize = 256;

/// Auswirkung eines neuen Werts auf die aktuelle Periode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUpdate {
    Unchanged(u32),
    Changed { from: u32, to: u32 },
}

/// Erfolgreich abgefragter und validierter Wert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetched {
    /// Rohwert wie vom Server geliefert (0 bei fehlendem Feld)
    pub raw: i64,
    /// Validierte Periode
    pub period: u32,
    pub adjustment: Adjustment,
    pub update: PeriodUpdate,
}

pub type FetchResult = Result<Fetched, FetchError>;

pub struct Fetcher<S> {
    source: S,
    limits: PeriodLimits,
}

impl<S: DelaySource> Fetcher<S> {
    pub fn new(source: S, limits: PeriodLimits) -> Self {
        Self { source, limits }
    }

    pub fn limits(&self) -> &PeriodLimits {
        &self.limits
    }

    /// Eine Abfrage: Request → Status prüfen → JSON parsen → validieren
    ///
    /// Bei jedem Fehler bleibt die aktuelle Periode unangetastet
    /// (lieber veraltet als zurück auf Default).
    pub async fn fetch(&mut self, current_period: u32) -> FetchResult {
        let mut body = [0u8; BODY_CAPACITY];
        let reply = self.source.get(&mut body).await?;

        if !reply.is_ok() {
            return Err(FetchError::Status(reply.status));
        }

        let raw = parse_delay(&body[..reply.len.min(BODY_CAPACITY)])?;
        let validated = assess_period(raw, &self.limits);

        let update = if validated.period == current_period {
            PeriodUpdate::Unchanged(current_period)
        } else {
            PeriodUpdate::Changed {
                from: current_period,
                to: validated.period,
            }
        };

        Ok(Fetched {
            raw,
            period: validated.period,
            adjustment: validated.adjustment,
            update,
        })
    }
}
