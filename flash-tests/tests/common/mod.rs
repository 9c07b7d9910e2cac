//! Mock-Implementierungen aller Core-Traits für Host-Tests
//!
//! Die Mocks teilen ihren Zustand über `Rc<RefCell<..>>`, damit ein Test
//! sie noch beobachten und steuern kann, nachdem der Scheduler sie
//! übernommen hat.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal_async::delay::DelayNs;
use flash_core::{
    Clock, ControllerConfig, Credentials, DelaySource, Event, EventSink, LedError, LinkError,
    NetworkLink, Palette, Parts, Reply, Scheduler, SmartLedWriter, TransportError,
};
use rgb::RGB8;

pub const CREDENTIALS: Credentials = Credentials {
    ssid: "test-net",
    secret: "hunter2",
};

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct LedLog {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
    pub history: Vec<RGB8>,
}

#[derive(Clone, Default)]
pub struct MockLedWriter(pub Rc<RefCell<LedLog>>);

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.0.borrow().last_color
    }

    pub fn write_count(&self) -> usize {
        self.0.borrow().write_count
    }

    pub fn history(&self) -> Vec<RGB8> {
        self.0.borrow().history.clone()
    }

    pub fn fail_next_write(&self) {
        self.0.borrow_mut().fail_next_write = true;
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        let mut log = self.0.borrow_mut();
        if log.fail_next_write {
            log.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        log.last_color = Some(color);
        log.write_count += 1;
        log.history.push(color);
        Ok(())
    }
}

// ============================================================================
// Mock Network Link
// ============================================================================

#[derive(Default)]
pub struct LinkScript {
    pub connected: bool,
    /// Nach so vielen `begin()` Aufrufen ist die Verbindung da (`None` = nie)
    pub connect_after_begins: Option<usize>,
    pub reject_begin: bool,
    pub begin_calls: usize,
    pub disconnect_calls: usize,
    pub last_ssid: Option<&'static str>,
}

#[derive(Clone, Default)]
pub struct MockLink(pub Rc<RefCell<LinkScript>>);

impl MockLink {
    /// Link der nie zustande kommt
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Link der nach `n` Connect-Requests steht
    pub fn connects_after(n: usize) -> Self {
        let link = Self::default();
        link.0.borrow_mut().connect_after_begins = Some(n);
        link
    }

    pub fn set_connected(&self, connected: bool) {
        self.0.borrow_mut().connected = connected;
    }

    /// Nächster Connect-Request ist erfolgreich nach `n` weiteren Versuchen
    pub fn reconnect_after(&self, n: usize) {
        self.0.borrow_mut().connect_after_begins = Some(n);
    }

    pub fn never_reconnect(&self) {
        self.0.borrow_mut().connect_after_begins = None;
    }

    pub fn begin_calls(&self) -> usize {
        self.0.borrow().begin_calls
    }

    pub fn disconnect_calls(&self) -> usize {
        self.0.borrow().disconnect_calls
    }
}

impl NetworkLink for MockLink {
    fn is_connected(&mut self) -> bool {
        self.0.borrow().connected
    }

    async fn begin(&mut self, credentials: &Credentials) -> Result<(), LinkError> {
        let mut script = self.0.borrow_mut();
        script.begin_calls += 1;
        script.last_ssid = Some(credentials.ssid);

        if script.reject_begin {
            return Err(LinkError::Rejected);
        }

        if let Some(remaining) = script.connect_after_begins {
            if remaining <= 1 {
                script.connected = true;
                script.connect_after_begins = None;
            } else {
                script.connect_after_begins = Some(remaining - 1);
            }
        }
        Ok(())
    }

    async fn disconnect(&mut self) {
        let mut script = self.0.borrow_mut();
        script.disconnect_calls += 1;
        script.connected = false;
    }
}

// ============================================================================
// Mock Delay Source (HTTP)
// ============================================================================

pub type Response = Result<(u16, &'static str), TransportError>;

#[derive(Default)]
pub struct SourceScript {
    pub responses: VecDeque<Response>,
    pub calls: usize,
}

#[derive(Clone, Default)]
pub struct MockSource(pub Rc<RefCell<SourceScript>>);

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Response) {
        self.0.borrow_mut().responses.push_back(response);
    }

    pub fn push_ok(&self, body: &'static str) {
        self.push(Ok((200, body)));
    }

    pub fn calls(&self) -> usize {
        self.0.borrow().calls
    }
}

impl DelaySource for MockSource {
    async fn get(&mut self, body: &mut [u8]) -> Result<Reply, TransportError> {
        let mut script = self.0.borrow_mut();
        script.calls += 1;

        // Ohne Skript: Server liefert immer den Default-Wert
        let (status, text) = script
            .responses
            .pop_front()
            .unwrap_or(Ok((200, r#"{"delay":500}"#)))?;

        let bytes = text.as_bytes();
        if bytes.len() > body.len() {
            return Err(TransportError::BodyTooLarge);
        }
        body[..bytes.len()].copy_from_slice(bytes);

        Ok(Reply {
            status,
            len: bytes.len(),
        })
    }
}

// ============================================================================
// Fake Zeit
// ============================================================================

/// Gemeinsame Test-Uhr in Millisekunden
#[derive(Clone, Default)]
pub struct FakeClock(pub Rc<Cell<u64>>);

impl FakeClock {
    pub fn at(ms: u64) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// Delay der nicht wartet, sondern die Fake-Uhr weiterdreht
#[derive(Clone, Default)]
pub struct FakeDelay {
    pub clock: FakeClock,
    pub waits: Rc<RefCell<Vec<u32>>>,
}

impl FakeDelay {
    pub fn new(clock: FakeClock) -> Self {
        Self {
            clock,
            waits: Rc::default(),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.waits.borrow().iter().map(|&ms| u64::from(ms)).sum()
    }

    pub fn waits(&self) -> Vec<u32> {
        self.waits.borrow().clone()
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        let ms = ns / 1_000_000;
        self.waits.borrow_mut().push(ms);
        self.clock.advance(u64::from(ms));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits.borrow_mut().push(ms);
        self.clock.advance(u64::from(ms));
    }
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Default)]
pub struct RecordingJournal {
    pub events: Vec<Event>,
}

impl RecordingJournal {
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn contains(&self, event: Event) -> bool {
        self.events.contains(&event)
    }
}

impl EventSink for RecordingJournal {
    fn record(&mut self, event: Event) {
        self.events.push(event);
    }
}

// ============================================================================
// Test Rig
// ============================================================================

pub type TestScheduler = Scheduler<MockLink, MockSource, MockLedWriter, FakeDelay, RecordingJournal>;

/// Scheduler mit allen Mocks und Handles darauf
pub struct Rig {
    pub scheduler: TestScheduler,
    pub link: MockLink,
    pub source: MockSource,
    pub led: MockLedWriter,
    pub delay: FakeDelay,
    pub clock: FakeClock,
}

impl Rig {
    pub fn new(link: MockLink) -> Self {
        Self::with_config(link, ControllerConfig::DEFAULT)
    }

    pub fn with_config(link: MockLink, config: ControllerConfig) -> Self {
        let source = MockSource::new();
        let led = MockLedWriter::new();
        let clock = FakeClock::at(0);
        let delay = FakeDelay::new(clock.clone());

        let scheduler = Scheduler::new(
            config,
            CREDENTIALS,
            Palette::DEFAULT,
            Parts {
                link: link.clone(),
                source: source.clone(),
                led: led.clone(),
                delay: delay.clone(),
                journal: RecordingJournal::default(),
            },
        )
        .expect("default config is valid");

        Self {
            scheduler,
            link,
            source,
            led,
            delay,
            clock,
        }
    }

    /// Scheduler mit stehender Verbindung, Bootstrap schon gelaufen
    pub fn online() -> Self {
        let mut rig = Self::new(MockLink::connects_after(1));
        rig.bootstrap();
        rig
    }

    pub fn bootstrap(&mut self) -> flash_core::LinkStatus {
        embassy_futures::block_on(self.scheduler.bootstrap(&self.clock))
    }

    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn tick(&mut self, now: u64) -> flash_core::TickReport {
        embassy_futures::block_on(self.scheduler.tick(now))
    }

    pub fn events(&self) -> &[Event] {
        &self.scheduler.journal().events
    }

    pub fn clear_events(&mut self) {
        self.scheduler.journal_mut().events.clear();
    }

    pub fn period(&self) -> u32 {
        self.scheduler.state().current_period
    }
}
