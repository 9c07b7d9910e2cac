//! Core Types für die Controller-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Zustand der WiFi-Verbindung (gehört dem Supervisor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Down,
    Connecting,
    Up,
}

impl LinkStatus {
    pub const fn is_up(self) -> bool {
        matches!(self, LinkStatus::Up)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Down => "Down",
            LinkStatus::Connecting => "Connecting",
            LinkStatus::Up => "Up",
        }
    }
}

/// WiFi-Zugangsdaten (werden zur Build-Zeit eingebacken)
#[derive(Clone, Copy)]
pub struct Credentials {
    pub ssid: &'static str,
    pub secret: &'static str,
}

// Passwort nie in Logs ausgeben
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .finish_non_exhaustive()
    }
}

/// Antwort einer HTTP-Abfrage
///
/// Der Body selbst liegt im Buffer des Aufrufers, `len` gibt an wie viele
/// Bytes davon gültig sind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub len: usize,
}

impl Reply {
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LinkStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Credentials {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Credentials {{ ssid: {} }}", self.ssid)
    }
}
