//! LED-Aktuator
//!
//! Setzt die Status-LED auf eine Farbe aus einer festen Palette und
//! schaltet im Betrieb zwischen An und Aus um.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::config::BlinkPattern;
use crate::scheduler::ScheduleState;
use crate::traits::SmartLedWriter;

/// Benannte Farben der Palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    On,
    Off,
    Connecting,
    Error,
    Success,
}

/// Farbwerte für jedes [`Signal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub on: RGB8,
    pub off: RGB8,
    pub connecting: RGB8,
    pub error: RGB8,
    pub success: RGB8,
}

impl Palette {
    /// Volle Helligkeit: Blau / Aus / Orange / Rot / Grün
    pub const DEFAULT: Self = Self {
        on: RGB8 { r: 0, g: 0, b: 255 },
        off: RGB8 { r: 0, g: 0, b: 0 },
        connecting: RGB8 {
            r: 255,
            g: 165,
            b: 0,
        },
        error: RGB8 { r: 255, g: 0, b: 0 },
        success: RGB8 { r: 0, g: 255, b: 0 },
    };

    pub const fn color(&self, signal: Signal) -> RGB8 {
        match signal {
            Signal::On => self.on,
            Signal::Off => self.off,
            Signal::Connecting => self.connecting,
            Signal::Error => self.error,
            Signal::Success => self.success,
        }
    }

    /// Skaliert alle Farben auf `level / 255` (WS2812 sind sehr hell)
    pub fn dimmed(self, level: u8) -> Self {
        let scale = |c: RGB8| RGB8 {
            r: scale_channel(c.r, level),
            g: scale_channel(c.g, level),
            b: scale_channel(c.b, level),
        };
        Self {
            on: scale(self.on),
            off: scale(self.off),
            connecting: scale(self.connecting),
            error: scale(self.error),
            success: scale(self.success),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn scale_channel(value: u8, level: u8) -> u8 {
    ((u16::from(value) * u16::from(level)) / 255) as u8
}

/// Output-Aktuator für genau eine RGB-LED
pub struct Actuator<W> {
    led: W,
    palette: Palette,
}

impl<W: SmartLedWriter> Actuator<W> {
    pub fn new(led: W, palette: Palette) -> Self {
        Self { led, palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// LED initialisieren: aus
    pub fn init(&mut self) {
        self.show(Signal::Off);
    }

    /// Setzt die LED auf eine Palettenfarbe
    pub fn show(&mut self, signal: Signal) {
        // Best effort: ein verlorener Frame wird beim nächsten Toggle überschrieben
        let _ = self.led.write(self.palette.color(signal));
    }

    /// Kippt `output_phase` und schreibt die passende Farbe (An/Aus)
    pub fn toggle_output(&mut self, state: &mut ScheduleState) {
        state.output_phase = !state.output_phase;
        self.show(if state.output_phase {
            Signal::On
        } else {
            Signal::Off
        });
    }

    /// Spielt ein Blink-Muster ab (blockiert für `pattern.duration_ms()`)
    pub async fn flash<D: DelayNs>(&mut self, signal: Signal, pattern: &BlinkPattern, delay: &mut D) {
        for _ in 0..pattern.count {
            self.show(signal);
            delay.delay_ms(pattern.on_ms).await;
            self.show(Signal::Off);
            delay.delay_ms(pattern.off_ms).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors() {
        let palette = Palette::DEFAULT;
        assert_eq!(palette.color(Signal::On), RGB8 { r: 0, g: 0, b: 255 });
        assert_eq!(palette.color(Signal::Off), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(palette.color(Signal::Connecting), RGB8 { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_dimmed_full_level_is_identity() {
        assert_eq!(Palette::DEFAULT.dimmed(255), Palette::DEFAULT);
    }

    #[test]
    fn test_dimmed_scales_channels() {
        let dimmed = Palette::DEFAULT.dimmed(50);
        assert_eq!(dimmed.on, RGB8 { r: 0, g: 0, b: 50 });
        assert_eq!(dimmed.connecting, RGB8 { r: 50, g: 32, b: 0 });
        assert_eq!(dimmed.off, RGB8 { r: 0, g: 0, b: 0 });
    }
}
