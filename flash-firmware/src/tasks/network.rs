// Network Task - treibt den embassy-net Stack
use embassy_net::Runner;
use esp_radio::wifi::WifiDevice;

/// Network Task
///
/// Prozessiert Netzwerk-Pakete (DHCP, DNS, TCP) für den gesamten Stack.
/// Muss laufen, bevor WiFi eine IP-Adresse bekommen kann.
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}
