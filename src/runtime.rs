use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::debug;

/// Roughly one display refresh at 60Hz
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What the app loop reacts to
#[derive(Clone, Debug)]
pub enum PadEvent {
    /// A key went down (or auto-repeated)
    Key(KeyEvent),
    Resize,
    /// Time to draw the next frame
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait PadEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<PadEvent, RecvTimeoutError>;
}

/// Reads crossterm events on a background thread and forwards them over a channel
pub struct CrosstermEventSource {
    rx: Receiver<PadEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(CtEvent::Key(key)) => tx.send(PadEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(PadEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    debug!(%err, "terminal event reader stopped");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PadEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<PadEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Frame pacing
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-fed event source for tests
pub struct TestEventSource {
    rx: Receiver<PadEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<PadEvent>) -> Self {
        Self { rx }
    }
}

impl PadEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<PadEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Interleaves input with frame ticks.
///
/// A `Tick` is due once per ticker interval no matter how busy the input is,
/// so a key held on auto-repeat cannot stall the render loop.
pub struct Runner<E: PadEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    next_frame: Instant,
}

impl<E: PadEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        let next_frame = Instant::now() + ticker.interval();
        Self {
            event_source,
            ticker,
            next_frame,
        }
    }

    /// Next key press or resize, or `Tick` once the current frame is up.
    /// Key releases never come out of here.
    pub fn step(&mut self) -> PadEvent {
        loop {
            let now = Instant::now();
            if now >= self.next_frame {
                self.next_frame = now + self.ticker.interval();
                return PadEvent::Tick;
            }

            match self.event_source.recv_timeout(self.next_frame - now) {
                Ok(PadEvent::Key(key)) if key.kind == KeyEventKind::Release => {}
                Ok(ev) => return ev,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    // no more input; keep the frames coming at the usual pace
                    thread::sleep(self.next_frame.saturating_duration_since(Instant::now()));
                }
            }
        }
    }
}
