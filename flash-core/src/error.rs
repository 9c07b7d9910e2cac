//! Fehler-Typen
//!
//! Alle Fehler werden lokal behandelt, keiner davon beendet den Controller.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// RMT-Kanal konnte nicht konfiguriert werden
    InitFailed,
    WriteFailed,
}

/// Fehler beim Anstoßen einer WiFi-Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// Treiber hat Konfiguration oder Connect-Request abgelehnt
    Rejected,
    /// WiFi-Treiber konnte nicht gestartet werden
    NotStarted,
}

/// Fehler auf Transport-Ebene (DNS, TCP, TLS, Timeout)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    Dns,
    Connect,
    Tls,
    Timeout,
    Io,
    InvalidUrl,
    /// Body passt nicht in den Empfangs-Buffer
    BodyTooLarge,
}

/// Fehler beim Parsen des JSON-Bodys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Syntax,
    InvalidType,
    InvalidNumber,
}

/// Fehler einer einzelnen API-Abfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    Transport(TransportError),
    /// HTTP-Status ungleich 200
    Status(u16),
    Parse(ParseError),
}

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<ParseError> for FetchError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// Ungültige Controller-Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroMinimum,
    BoundsInverted,
    DefaultOutOfBounds,
    ZeroInterval,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "LED init failed"),
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LinkError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LinkError::Rejected => defmt::write!(fmt, "request rejected"),
            LinkError::NotStarted => defmt::write!(fmt, "driver not started"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TransportError::Dns => defmt::write!(fmt, "DNS failed"),
            TransportError::Connect => defmt::write!(fmt, "Connection failed"),
            TransportError::Tls => defmt::write!(fmt, "TLS handshake failed"),
            TransportError::Timeout => defmt::write!(fmt, "Request timeout"),
            TransportError::Io => defmt::write!(fmt, "I/O error"),
            TransportError::InvalidUrl => defmt::write!(fmt, "Invalid URL"),
            TransportError::BodyTooLarge => defmt::write!(fmt, "Body too large"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ParseError::Empty => defmt::write!(fmt, "empty body"),
            ParseError::Syntax => defmt::write!(fmt, "invalid JSON"),
            ParseError::InvalidType => defmt::write!(fmt, "delay is not an integer"),
            ParseError::InvalidNumber => defmt::write!(fmt, "delay is not a valid number"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FetchError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FetchError::Transport(e) => defmt::write!(fmt, "Connection Error: {}", e),
            FetchError::Status(code) => defmt::write!(fmt, "HTTP Error: {}", code),
            FetchError::Parse(e) => defmt::write!(fmt, "JSON Parse Error: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::ZeroMinimum => defmt::write!(fmt, "minimum period is 0"),
            ConfigError::BoundsInverted => defmt::write!(fmt, "minimum period above maximum"),
            ConfigError::DefaultOutOfBounds => defmt::write!(fmt, "default period out of bounds"),
            ConfigError::ZeroInterval => defmt::write!(fmt, "interval or timeout is 0"),
        }
    }
}
