//! Controller-Konfiguration
//!
//! Alle Grenzen, Intervalle und Blink-Muster, von denen der Scheduler
//! abhängt. Die Firmware setzt die Werte in ihrer `config.rs`,
//! hier liegen nur die Typen und die Default-Werte.

use crate::error::ConfigError;

/// Erlaubter Bereich für die Blink-Periode (Millisekunden)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLimits {
    pub min: u32,
    pub max: u32,
    /// Ersatzwert wenn der Server `delay: 0` oder gar nichts liefert
    pub default: u32,
}

impl PeriodLimits {
    pub const DEFAULT: Self = Self {
        min: 50,
        max: 2000,
        default: 500,
    };

    /// Liegt `period` innerhalb `[min, max]`?
    pub const fn contains(&self, period: u32) -> bool {
        period >= self.min && period <= self.max
    }
}

impl Default for PeriodLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Festes Blink-Muster: `count` mal (Farbe für `on_ms`, Aus für `off_ms`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    pub count: u8,
    pub on_ms: u32,
    pub off_ms: u32,
}

impl BlinkPattern {
    pub const fn new(count: u8, on_ms: u32, off_ms: u32) -> Self {
        Self {
            count,
            on_ms,
            off_ms,
        }
    }

    /// Gesamtdauer des Musters in Millisekunden
    pub const fn duration_ms(&self) -> u32 {
        (self.count as u32).saturating_mul(self.on_ms.saturating_add(self.off_ms))
    }
}

/// Parameter für den Verbindungsaufbau
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BringUpConfig {
    /// Maximale Anzahl Warte-Runden beim Bootstrap
    pub attempts: u8,
    /// Wartezeit pro Runde beim Bootstrap
    pub attempt_wait_ms: u32,
    /// Einmalige kurze Wartezeit nach einem Reconnect-Versuch im Scheduler
    pub reconnect_settle_ms: u32,
}

impl BringUpConfig {
    pub const DEFAULT: Self = Self {
        attempts: 30,
        attempt_wait_ms: 500,
        reconnect_settle_ms: 100,
    };
}

impl Default for BringUpConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Komplette Konfiguration des Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub limits: PeriodLimits,
    /// Abstand zwischen zwei API-Abfragen
    pub fetch_interval_ms: u32,
    /// Abstand zwischen zwei WiFi-Prüfungen
    pub link_check_interval_ms: u32,
    /// Obergrenze für einen einzelnen HTTP-Request
    pub request_timeout_ms: u32,
    /// TLS-Zertifikatsprüfung für den API-Endpunkt.
    ///
    /// Standard ist `false`: der Endpunkt gilt per Konfiguration als
    /// vertrauenswürdig und das Zertifikat wird NICHT geprüft.
    pub secure_channel_verify: bool,
    pub bring_up: BringUpConfig,
    /// LED-Test direkt nach dem Start
    pub self_test: BlinkPattern,
    /// Grünes Blinken nach erfolgreichem Verbindungsaufbau
    pub success_flash: BlinkPattern,
    /// Rotes Blinken wenn der Verbindungsaufbau fehlschlägt
    pub error_flash: BlinkPattern,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        limits: PeriodLimits::DEFAULT,
        fetch_interval_ms: 1000,
        link_check_interval_ms: 5000,
        request_timeout_ms: 5000,
        secure_channel_verify: false,
        bring_up: BringUpConfig::DEFAULT,
        self_test: BlinkPattern::new(3, 200, 200),
        success_flash: BlinkPattern::new(3, 100, 100),
        error_flash: BlinkPattern::new(5, 200, 200),
    };

    /// Prüft die Konfiguration auf Widersprüche
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if limits.min > limits.max {
            return Err(ConfigError::BoundsInverted);
        }
        if !limits.contains(limits.default) {
            return Err(ConfigError::DefaultOutOfBounds);
        }
        if self.fetch_interval_ms == 0
            || self.link_check_interval_ms == 0
            || self.request_timeout_ms == 0
        {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
