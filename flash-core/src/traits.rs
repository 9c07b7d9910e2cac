//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware- und Netzwerk-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `flash-controller` (RMT LED, esp-radio WiFi, reqwless HTTPS)
//! - **Testing:** Mocks in `flash-tests`

use core::future::Future;

use rgb::RGB8;

use crate::error::{LedError, LinkError, TransportError};
use crate::event::Event;
use crate::types::{Credentials, Reply};

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Trait für die Netzwerk-Verbindung (WiFi Station)
pub trait NetworkLink {
    /// Ist die Verbindung komplett nutzbar (assoziiert + IP-Adresse)?
    fn is_connected(&mut self) -> bool;

    /// Stößt einen Verbindungsaufbau an, wartet aber NICHT auf das Ergebnis
    fn begin(&mut self, credentials: &Credentials)
    -> impl Future<Output = Result<(), LinkError>>;

    /// Trennt eine (halb) aufgebaute Verbindung
    fn disconnect(&mut self) -> impl Future<Output = ()>;
}

/// Trait für die Quelle der Blink-Periode (HTTP GET auf den API-Endpunkt)
pub trait DelaySource {
    /// Führt genau eine Request/Response-Abfrage durch
    ///
    /// Der Body wird nach `body` kopiert. Die Implementierung begrenzt die
    /// Dauer selbst (Request-Timeout) und liefert dann
    /// `TransportError::Timeout`.
    fn get(&mut self, body: &mut [u8]) -> impl Future<Output = Result<Reply, TransportError>>;
}

/// Ziel für Diagnose-Events (serielles Log in der Firmware)
pub trait EventSink {
    fn record(&mut self, event: Event);
}

/// Monotone Zeitquelle in Millisekunden
pub trait Clock {
    fn now_ms(&self) -> u64;
}
