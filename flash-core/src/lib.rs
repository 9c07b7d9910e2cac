//! Flash Core - Platform-agnostic Scheduler, Tasks and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den kooperativen Scheduler, die drei Tasks
//! (Link-Supervisor, Parameter-Fetcher, LED-Aktuator) und die Traits,
//! über die die Firmware Hardware und Netzwerk anbindet.

#![no_std]

pub mod actuator;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod event;
pub mod fetcher;
pub mod logic;
pub mod scheduler;
pub mod supervisor;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use actuator::{Actuator, Palette, Signal};
pub use config::{BlinkPattern, BringUpConfig, ControllerConfig, PeriodLimits};
pub use error::{ConfigError, FetchError, LedError, LinkError, ParseError, TransportError};
pub use event::{Event, Fault};
pub use fetcher::{BODY_CAPACITY, FetchResult, Fetched, Fetcher, PeriodUpdate};
pub use logic::{Adjustment, Validated, assess_period, parse_delay, validate_period};
pub use scheduler::{Parts, ScheduleState, Scheduler, TickReport};
pub use supervisor::Supervisor;
pub use traits::{Clock, DelaySource, EventSink, NetworkLink, SmartLedWriter};
pub use types::{Credentials, LinkStatus, Reply};
