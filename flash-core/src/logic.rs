//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!):
//! Validierung der Blink-Periode und Parsen der API-Antwort.

use serde::Deserialize;

use crate::config::PeriodLimits;
use crate::error::ParseError;

/// Was die Validierung am Rohwert geändert hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Wert lag im erlaubten Bereich
    None,
    /// Rohwert war 0 (oder fehlte) → Default-Periode
    Defaulted,
    /// Rohwert lag außerhalb `[min, max]` und wurde begrenzt
    Clamped { raw: i64 },
}

/// Ergebnis von [`assess_period`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    pub period: u32,
    pub adjustment: Adjustment,
}

/// Validiert einen Rohwert vom Server
///
/// Reihenfolge wie in der Firmware-Logik:
/// 1. `0` → Default-Periode
/// 2. außerhalb `[min, max]` → auf die nächste Grenze begrenzen
///
/// ```
/// # use flash_core::{PeriodLimits, assess_period, Adjustment};
/// let limits = PeriodLimits::DEFAULT;
/// let v = assess_period(5000, &limits);
/// assert_eq!(v.period, 2000);
/// assert_eq!(v.adjustment, Adjustment::Clamped { raw: 5000 });
/// ```
pub fn assess_period(raw: i64, limits: &PeriodLimits) -> Validated {
    if raw == 0 {
        return Validated {
            period: limits.default,
            adjustment: Adjustment::Defaulted,
        };
    }

    let min = i64::from(limits.min);
    let max = i64::from(limits.max);
    if raw < min || raw > max {
        return Validated {
            period: raw.clamp(min, max) as u32,
            adjustment: Adjustment::Clamped { raw },
        };
    }

    Validated {
        period: raw as u32,
        adjustment: Adjustment::None,
    }
}

/// Kurzform von [`assess_period`], liefert nur die Periode
pub fn validate_period(raw: i64, limits: &PeriodLimits) -> u32 {
    assess_period(raw, limits).period
}

/// JSON-Body der API: `{"delay": 1200, "min": 50, "max": 2000, "timestamp": ...}`
///
/// Nur `delay` wird gebraucht, alle anderen Felder werden ignoriert.
#[derive(Debug, Deserialize)]
struct DelayPayload {
    #[serde(default)]
    delay: Option<f64>,
}

/// Liest das `delay`-Feld aus dem Response-Body
///
/// Jede JSON-Zahl wird akzeptiert und Richtung Null abgeschnitten
/// (`1200.0` -> 1200, `12.5` -> 12). Fehlendes Feld, `null` oder eine Zahl
/// außerhalb von `i64` ergibt `0`, die Validierung macht daraus später die
/// Default-Periode.
pub fn parse_delay(body: &[u8]) -> Result<i64, ParseError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::Empty);
    }

    let (payload, _) =
        serde_json_core::from_slice::<DelayPayload>(body).map_err(|e| match e {
            serde_json_core::de::Error::InvalidType => ParseError::InvalidType,
            serde_json_core::de::Error::InvalidNumber => ParseError::InvalidNumber,
            _ => ParseError::Syntax,
        })?;

    Ok(payload.delay.map_or(0, truncate_delay))
}

/// Schneidet Richtung Null ab, nicht darstellbare Werte werden zu `0`
fn truncate_delay(value: f64) -> i64 {
    // i64::MAX als f64 ist 2^63 und selbst schon zu groß
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value >= -LIMIT && value < LIMIT {
        value as i64
    } else {
        0
    }
}
