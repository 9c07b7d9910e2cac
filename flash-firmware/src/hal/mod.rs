// Hardware Abstraction Layer (HAL) Module
//
// Konkrete Implementierungen der flash-core Traits für den ESP32-C6.

pub mod clock;
pub mod led_writer;

pub use clock::EmbassyClock;
pub use led_writer::RmtLedWriter;
