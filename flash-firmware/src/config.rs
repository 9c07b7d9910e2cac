// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use flash_core::{ControllerConfig, Credentials};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
/// Muss zu `peripherals.GPIO8` in main.rs passen, wird beim Start geloggt
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die LED (0-255)
/// Die Palette wird damit gedimmt, volle Helligkeit blendet
pub const LED_BRIGHTNESS: u8 = 50;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

pub const CREDENTIALS: Credentials = Credentials {
    ssid: WIFI_SSID,
    secret: WIFI_PASSWORD,
};

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// API Konfiguration
// ============================================================================

/// HTTPS-Endpunkt, der `{"delay": <ms>}` liefert
/// Wird zur Build-Zeit aus der Environment Variable DELAY_API_URL geladen
pub const DELAY_API_URL: &str = env!(
    "DELAY_API_URL",
    "API URL nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// TLS Record-Buffer (RX und TX je einmal)
/// 16 KB Record + Header, kleiner geht nur mit Max-Fragment-Length
pub const TLS_BUFFER_SIZE: usize = 16640;

/// Buffer für Status-Zeile und Header der HTTP-Antwort
pub const HTTP_RX_BUFFER_SIZE: usize = 2048;

/// TCP Socket-Buffer für den HTTP-Client
pub const TCP_BUFFER_SIZE: usize = 4096;

/// Sockets im embassy-net Stack: 1x TCP (HTTP) + DNS + DHCP
pub const STACK_SOCKETS: usize = 4;

// ============================================================================
// Controller Konfiguration
// ============================================================================

/// Intervalle, Grenzen und Blink-Muster des Controllers
///
/// Entspricht den Standardwerten aus `flash-core`, hier zentral änderbar.
pub const CONTROLLER_CONFIG: ControllerConfig = ControllerConfig {
    fetch_interval_ms: 1000,
    link_check_interval_ms: 5000,
    request_timeout_ms: 5000,
    // Zertifikat wird nicht geprüft (Endpunkt per Konfiguration vertraut)
    secure_channel_verify: false,
    ..ControllerConfig::DEFAULT
};
