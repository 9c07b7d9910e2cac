// Controller Task - Bootstrap und kooperativer Scheduler
use defmt::{Debug2Format, error, info};
use embassy_net::Stack;
use embassy_time::Delay;
use esp_hal_smartled::smart_led_buffer;
use flash_core::{Palette, Parts, Scheduler};

use crate::config::{
    CONTROLLER_CONFIG, CREDENTIALS, DELAY_API_URL, LED_BRIGHTNESS, LED_GPIO_PIN, RMT_CLOCK_MHZ,
};
use crate::hal::{EmbassyClock, RmtLedWriter};
use crate::journal::DefmtJournal;
use crate::net::{HttpDelaySource, WifiLink};

/// Controller Task
///
/// Baut LED-Treiber und Scheduler auf, führt den Bootstrap aus (LED-Test,
/// WiFi-Aufbau) und übergibt dann an die Scheduler-Schleife. Kehrt nur
/// zurück, wenn die Hardware nicht initialisiert werden kann.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `link`: WiFi-Station (Connectivity Supervisor)
/// - `source`: HTTPS-Client für den Delay-Endpunkt (Parameter Fetcher)
/// - `stack`: nur für das IP-Log nach dem Bootstrap
#[embassy_executor::task]
pub async fn controller_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    link: WifiLink,
    source: HttpDelaySource,
    stack: Stack<'static>,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let led = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => {
            info!("LED: WS2812 on GPIO{}", LED_GPIO_PIN);
            led
        }
        Err(e) => {
            error!("LED: {}", e);
            return;
        }
    };

    let parts = Parts {
        link,
        source,
        led,
        delay: Delay,
        journal: DefmtJournal,
    };
    let palette = Palette::DEFAULT.dimmed(LED_BRIGHTNESS);

    let mut scheduler = match Scheduler::new(CONTROLLER_CONFIG, CREDENTIALS, palette, parts) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            error!("SYSTEM: Invalid configuration: {}", e);
            return;
        }
    };

    let clock = EmbassyClock;
    let status = scheduler.bootstrap(&clock).await;
    if status.is_up()
        && let Some(config) = stack.config_v4()
    {
        info!("WiFi: IP {}", Debug2Format(&config.address.address()));
    }
    let config = scheduler.config();
    info!(
        "API: Polling {} every {} ms (WiFi {})",
        DELAY_API_URL,
        config.fetch_interval_ms,
        scheduler.link_status()
    );

    scheduler.run(&clock).await
}
