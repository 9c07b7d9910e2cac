// HTTPS-Client für den Delay-Endpunkt
use defmt::{Format, debug, info, warn};
use embassy_net::Stack;
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::{TcpClient, TcpClientState};
use embassy_time::{Duration, with_timeout};
use esp_hal::rng::Rng;
use flash_core::{DelaySource, Reply, TransportError};
use reqwless::client::{HttpClient, TlsConfig, TlsVerify};
use reqwless::headers::ContentType;
use reqwless::request::{Method, RequestBuilder};
use static_cell::ConstStaticCell;

use crate::config::{HTTP_RX_BUFFER_SIZE, TCP_BUFFER_SIZE, TLS_BUFFER_SIZE};

type ClientState = TcpClientState<1, TCP_BUFFER_SIZE, TCP_BUFFER_SIZE>;

// Statische Buffer: zu groß für den Task-Stack
static TCP_STATE: ConstStaticCell<ClientState> = ConstStaticCell::new(TcpClientState::new());
static TLS_READ: ConstStaticCell<[u8; TLS_BUFFER_SIZE]> = ConstStaticCell::new([0; TLS_BUFFER_SIZE]);
static TLS_WRITE: ConstStaticCell<[u8; TLS_BUFFER_SIZE]> =
    ConstStaticCell::new([0; TLS_BUFFER_SIZE]);
static RX_BUFFER: ConstStaticCell<[u8; HTTP_RX_BUFFER_SIZE]> =
    ConstStaticCell::new([0; HTTP_RX_BUFFER_SIZE]);

/// Fehler beim Einrichten des HTTPS-Clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum SetupError {
    /// Zertifikatsprüfung angefordert, der TLS-Stack kann sie aber nicht
    VerificationUnsupported,
    /// Statische Buffer wurden schon von einer anderen Instanz belegt
    BuffersInUse,
}

/// `DelaySource` über HTTPS (reqwless + embedded-tls)
///
/// Jede Abfrage baut eine eigene Verbindung auf: DNS, TCP, TLS-Handshake,
/// ein GET, Body lesen, Verbindung schließen. Bei einer Abfrage pro Sekunde
/// lohnt sich Keep-Alive auf dem ESP32 nicht.
pub struct HttpDelaySource {
    url: &'static str,
    timeout: Duration,
    tcp: TcpClient<'static, 1, TCP_BUFFER_SIZE, TCP_BUFFER_SIZE>,
    dns: DnsSocket<'static>,
    tls_read: &'static mut [u8; TLS_BUFFER_SIZE],
    tls_write: &'static mut [u8; TLS_BUFFER_SIZE],
    rx: &'static mut [u8; HTTP_RX_BUFFER_SIZE],
    rng: Rng,
}

impl HttpDelaySource {
    /// Erstellt den Client
    ///
    /// # Parameter
    /// - `stack`: embassy-net Stack (DHCP, DNS, TCP)
    /// - `url`: vollständige `https://` URL des Endpunkts
    /// - `timeout_ms`: Obergrenze für eine komplette Abfrage
    /// - `verify`: Zertifikatsprüfung (wird von embedded-tls nicht unterstützt)
    pub fn new(
        stack: Stack<'static>,
        url: &'static str,
        timeout_ms: u32,
        verify: bool,
    ) -> Result<Self, SetupError> {
        if verify {
            return Err(SetupError::VerificationUnsupported);
        }
        warn!("API: TLS certificate verification is disabled");
        info!("API: Endpoint {}", url);

        let state = TCP_STATE.try_take().ok_or(SetupError::BuffersInUse)?;
        let tls_read = TLS_READ.try_take().ok_or(SetupError::BuffersInUse)?;
        let tls_write = TLS_WRITE.try_take().ok_or(SetupError::BuffersInUse)?;
        let rx = RX_BUFFER.try_take().ok_or(SetupError::BuffersInUse)?;

        Ok(Self {
            url,
            timeout: Duration::from_millis(u64::from(timeout_ms)),
            tcp: TcpClient::new(stack, state),
            dns: DnsSocket::new(stack),
            tls_read,
            tls_write,
            rx,
            rng: Rng::new(),
        })
    }

    async fn request(&mut self, body: &mut [u8]) -> Result<Reply, TransportError> {
        // Frischer Seed pro Handshake aus dem Hardware-RNG
        let seed = u64::from(self.rng.random()) << 32 | u64::from(self.rng.random());
        let tls = TlsConfig::new(
            seed,
            &mut self.tls_read[..],
            &mut self.tls_write[..],
            TlsVerify::None,
        );
        let mut client = HttpClient::new_with_tls(&self.tcp, &self.dns, tls);

        let mut request = client
            .request(Method::GET, self.url)
            .await
            .map_err(transport_error)?
            .content_type(ContentType::ApplicationJson);

        let response = request
            .send(&mut self.rx[..])
            .await
            .map_err(transport_error)?;
        let status = response.status.0;

        let payload = response
            .body()
            .read_to_end()
            .await
            .map_err(transport_error)?;
        let text = core::str::from_utf8(payload).unwrap_or("<binary>");
        if status == 200 {
            info!("API: HTTP {}", status);
            debug!("API: Body {}", text);
        } else {
            warn!("API: HTTP {}, body {}", status, text);
        }

        let target = body
            .get_mut(..payload.len())
            .ok_or(TransportError::BodyTooLarge)?;
        target.copy_from_slice(payload);

        Ok(Reply {
            status,
            len: payload.len(),
        })
    }
}

impl DelaySource for HttpDelaySource {
    async fn get(&mut self, body: &mut [u8]) -> Result<Reply, TransportError> {
        let timeout = self.timeout;
        with_timeout(timeout, self.request(body))
            .await
            .map_err(|_| TransportError::Timeout)?
    }
}

/// Bildet reqwless-Fehler auf die Transport-Taxonomie ab
fn transport_error(e: reqwless::Error) -> TransportError {
    match e {
        reqwless::Error::Dns => TransportError::Dns,
        reqwless::Error::InvalidUrl(_) => TransportError::InvalidUrl,
        reqwless::Error::Tls(_) => TransportError::Tls,
        reqwless::Error::ConnectionAborted => TransportError::Connect,
        // Antwort (Header oder Body) passt nicht in den RX-Buffer
        reqwless::Error::BufferTooSmall => TransportError::BodyTooLarge,
        _ => TransportError::Io,
    }
}
