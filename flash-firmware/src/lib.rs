// Library-Root: Firmware-Implementierungen der flash-core Traits
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für WiFi-Konfiguration (SSID/Passwort als String)
extern crate alloc;

// Module
pub mod config;
pub mod hal;
pub mod journal;
pub mod net;
pub mod tasks;

// Re-exports von flash-core
pub use flash_core::{ControllerConfig, Event, LinkStatus, Scheduler};
