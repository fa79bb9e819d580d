use std::time::{Duration, Instant};

/// Tick metadata - sequence number and time since the loop started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInfo {
    pub number: u64,
    pub uptime: Duration,
}

impl TickInfo {
    pub fn new(number: u64, uptime: Duration) -> Self {
        Self { number, uptime }
    }
}

/// Numbers refresh ticks and stamps them with loop uptime
#[derive(Debug)]
pub struct TickCounter {
    tick_number: u64,
    start_time: Instant,
}

impl TickCounter {
    pub fn new() -> Self {
        Self {
            tick_number: 0,
            start_time: Instant::now(),
        }
    }

    /// Number of ticks handed out so far
    pub fn issued(&self) -> u64 {
        self.tick_number
    }

    /// Hand out the next tick
    pub fn advance(&mut self) -> TickInfo {
        let info = TickInfo::new(self.tick_number, self.start_time.elapsed());
        self.tick_number += 1;
        info
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
