// Netzwerk-Module: WiFi-Station und HTTPS-Client
//
// Beide implementieren Traits aus flash-core, die Logik (Retry, Timing,
// Validierung) liegt komplett dort.

pub mod http_source;
pub mod wifi_link;

pub use http_source::{HttpDelaySource, SetupError};
pub use wifi_link::WifiLink;
