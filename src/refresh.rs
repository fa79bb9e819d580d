//! Timed driver: fetch status, compose a frame, present it, wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use embedded_graphics::geometry::Point;
use log::{debug, error, info, trace};

use crate::core::{Clock, DisplayBounds, FrameComposer, Image};
use crate::error::{MonitorError, Result};
use crate::status::format_status;
use crate::tick::TickCounter;
use crate::traits::{DisplaySink, StatusProvider};

/// Default wait between ticks
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Where the loop currently is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    FetchStatus,
    Compose,
    Present,
    Sleep,
    /// Terminal: a fatal error stopped the loop
    Failed,
}

/// Shared flag asking the loop to finish after the current tick
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Single-worker refresh loop driving one panel
pub struct RefreshLoop<D, S> {
    sink: D,
    status: S,
    composer: FrameComposer,
    source: Image,
    interface: String,
    bounds: DisplayBounds,
    interval: Duration,
    state: LoopState,
    failure: Option<MonitorError>,
    ticks: TickCounter,
    stop: StopHandle,
}

impl<D: DisplaySink, S: StatusProvider> RefreshLoop<D, S> {
    /// Create loop for `sink`; panel bounds are read once here
    pub fn new(sink: D, status: S, source: Image, interface: impl Into<String>) -> Result<Self> {
        let bounds = DisplayBounds::from_rectangle(&sink.bounds());
        if bounds.is_empty() {
            return Err(MonitorError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Self {
            sink,
            status,
            composer: FrameComposer::new(),
            source,
            interface: interface.into(),
            bounds,
            interval: REFRESH_INTERVAL,
            state: LoopState::Idle,
            failure: None,
            ticks: TickCounter::new(),
            stop: StopHandle::new(),
        })
    }

    pub fn with_composer(mut self, composer: FrameComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Fixed delay after each tick, independent of how long the tick took
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Handle that ends `run` between ticks
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Number of ticks started so far
    pub fn ticks(&self) -> u64 {
        self.ticks.issued()
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// One FetchStatus -> Compose -> Present cycle
    pub fn step(&mut self) -> Result<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let tick = self.ticks.advance();
        let mut clock = Clock::new();

        self.state = LoopState::FetchStatus;
        let hostname = self.status.hostname();
        let ipv4 = self.status.ipv4(&self.interface);
        let text = format_status(&hostname, &ipv4);
        trace!("tick {}: status {:?}", tick.number, text);

        self.state = LoopState::Compose;
        let frame = match self.composer.compose(self.bounds, &self.source, &text) {
            Ok(frame) => frame,
            Err(err) => return Err(self.fail(err)),
        };

        self.state = LoopState::Present;
        if let Err(err) = self.sink.draw(self.bounds.rectangle(), &frame, Point::zero()) {
            return Err(self.fail(err));
        }

        debug!(
            "tick {} presented in {:?} (uptime {:?})",
            tick.number,
            clock.tick(),
            tick.uptime
        );
        Ok(())
    }

    /// Run until stopped (`Ok`) or a fatal error (`Err`, state `Failed`).
    /// Failures are not retried.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "refreshing {}x{} panel every {:?}",
            self.bounds.width, self.bounds.height, self.interval
        );

        while !self.stop.is_stopped() {
            self.step()?;
            self.state = LoopState::Sleep;
            thread::sleep(self.interval);
        }

        self.state = LoopState::Idle;
        info!("refresh loop stopped after {} ticks", self.ticks.issued());
        Ok(())
    }

    fn fail(&mut self, err: MonitorError) -> MonitorError {
        error!("refresh loop failed: {}", err);
        self.state = LoopState::Failed;
        self.failure = Some(err.clone());
        err
    }
}
