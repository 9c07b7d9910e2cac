// WiFi Station - stößt Verbindungen an und meldet den Zustand
use defmt::{Debug2Format, info, warn};
use embassy_net::Stack;
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController};
use flash_core::{Credentials, LinkError, NetworkLink};

/// WiFi-Verbindung auf Basis von esp-radio und embassy-net
///
/// "Verbunden" heißt hier: mit dem Access Point assoziiert UND per DHCP
/// eine IPv4-Adresse erhalten. Vorher kann der Fetcher nichts anfangen.
pub struct WifiLink {
    controller: WifiController<'static>,
    stack: Stack<'static>,
}

impl WifiLink {
    pub fn new(controller: WifiController<'static>, stack: Stack<'static>) -> Self {
        Self { controller, stack }
    }

    /// Konfiguriert und startet den Treiber beim ersten Aufruf
    async fn ensure_started(&mut self, credentials: &Credentials) -> Result<(), LinkError> {
        if matches!(self.controller.is_started(), Ok(true)) {
            return Ok(());
        }

        info!("WiFi: Configuring and starting...");
        let client_config = ModeConfig::Client(
            ClientConfig::default()
                .with_ssid(credentials.ssid.into())
                .with_password(credentials.secret.into()),
        );

        self.controller.set_config(&client_config).map_err(|e| {
            warn!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
            LinkError::Rejected
        })?;

        self.controller.start_async().await.map_err(|e| {
            warn!("WiFi: Failed to start: {}", Debug2Format(&e));
            LinkError::NotStarted
        })?;

        info!("WiFi: Started successfully");
        Ok(())
    }
}

impl NetworkLink for WifiLink {
    fn is_connected(&mut self) -> bool {
        matches!(self.controller.is_connected(), Ok(true))
            && self.stack.is_link_up()
            && self.stack.config_v4().is_some()
    }

    async fn begin(&mut self, credentials: &Credentials) -> Result<(), LinkError> {
        self.ensure_started(credentials).await?;

        info!("WiFi: Connecting to '{}'...", credentials.ssid);
        // Nicht-blockierend: Ergebnis kommt über is_connected()
        self.controller.connect().map_err(|e| {
            warn!("WiFi: Connect request rejected: {}", Debug2Format(&e));
            LinkError::Rejected
        })
    }

    async fn disconnect(&mut self) {
        if let Err(e) = self.controller.disconnect_async().await {
            // Beim Reconnect ist der Link meist schon weg
            warn!("WiFi: Disconnect failed: {}", Debug2Format(&e));
        }
    }
}
