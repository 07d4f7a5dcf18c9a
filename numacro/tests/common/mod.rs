#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal_async::delay::DelayNs;
use numacro::Color;
use numacro::driver::{DisplaySink, LedStripDriver, ResetRequester, TextEntry, XAnchor, YAnchor};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A line of text as received by the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
}

impl From<&TextEntry<'_>> for Shown {
    fn from(entry: &TextEntry<'_>) -> Self {
        Self {
            text: entry.text.to_string(),
            x: entry.x,
            y: entry.y,
            x_anchor: entry.x_anchor,
            y_anchor: entry.y_anchor,
        }
    }
}

/// Collaborator calls, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    SetAll(Color),
    /// Commit of the pending frame, with the color it was filled with
    Commit(Option<Color>),
    Render(Vec<Shown>),
    DelayMs(u32),
    Reset,
}

#[derive(Clone, Default)]
pub struct OpLog(Rc<RefCell<Vec<Op>>>);

impl OpLog {
    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn commits(&self) -> Vec<Option<Color>> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Commit(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn renders(&self) -> Vec<Vec<Shown>> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Render(entries) => Some(entries),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::DelayMs(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    pub fn resets(&self) -> usize {
        self.ops().iter().filter(|op| **op == Op::Reset).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub struct MockStrip {
    log: OpLog,
    pending: Option<Color>,
    /// Fail every commit once set
    pub broken: bool,
}

impl MockStrip {
    pub fn new(log: &OpLog) -> Self {
        Self {
            log: log.clone(),
            pending: None,
            broken: false,
        }
    }
}

impl LedStripDriver for MockStrip {
    type Error = MockError;

    fn set_all(&mut self, color: Color) -> Result<(), Self::Error> {
        self.log.push(Op::SetAll(color));
        self.pending = Some(color);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(MockError);
        }
        self.log.push(Op::Commit(self.pending));
        Ok(())
    }
}

pub struct MockDisplay {
    log: OpLog,
    /// Number of renders that succeed before the display fails
    pub fail_after: Option<usize>,
    /// Index of a single render that fails
    pub fail_on: Option<usize>,
    renders: usize,
}

impl MockDisplay {
    pub fn new(log: &OpLog) -> Self {
        Self {
            log: log.clone(),
            fail_after: None,
            fail_on: None,
            renders: 0,
        }
    }
}

impl DisplaySink for MockDisplay {
    type Error = MockError;

    fn render(&mut self, entries: &[TextEntry<'_>]) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|n| self.renders >= n) {
            return Err(MockError);
        }
        if self.fail_on == Some(self.renders) {
            self.renders += 1;
            return Err(MockError);
        }
        self.renders += 1;
        self.log.push(Op::Render(entries.iter().map(Shown::from).collect()));
        Ok(())
    }
}

pub struct MockReset {
    log: OpLog,
}

impl MockReset {
    pub fn new(log: &OpLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ResetRequester for MockReset {
    fn request_reset(&mut self) {
        self.log.push(Op::Reset);
    }
}

/// Clock that records delays and returns right away
pub struct MockClock {
    log: OpLog,
}

impl MockClock {
    pub fn new(log: &OpLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Op::DelayMs(ns / 1_000_000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.log.push(Op::DelayMs(us / 1_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Op::DelayMs(ms));
    }
}

/// All mocked collaborators sharing one op log
pub struct Rig {
    pub log: OpLog,
    pub strip: RefCell<MockStrip>,
    pub display: RefCell<MockDisplay>,
    pub reset: RefCell<MockReset>,
}

impl Rig {
    pub fn new() -> Self {
        let log = OpLog::default();
        Self {
            strip: RefCell::new(MockStrip::new(&log)),
            display: RefCell::new(MockDisplay::new(&log)),
            reset: RefCell::new(MockReset::new(&log)),
            log,
        }
    }

    pub fn clock(&self) -> MockClock {
        MockClock::new(&self.log)
    }
}

/// The restart message as shown by each countdown frame
pub const COUNTDOWN_TEXTS: [&str; 10] = [
    "Re..................",
    "Rest................",
    "Restar..............",
    "Restarti............",
    "Restarting..........",
    "Restarting K........",
    "Restarting Key......",
    "Restarting Keybo....",
    "Restarting Keyboar..",
    "Restarting Keyboard!",
];
