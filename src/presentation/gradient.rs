//! Gradient direction and the repeating gradient animation

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Time for the animated gradient to sweep once across its content
pub const ANIMATION_PERIOD: Duration = Duration::from_secs(3);

/// Phase update interval (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A point in a view's frame, in fractions of its width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const LEADING: Self = Self { x: 0.0, y: 0.5 };
    pub const TRAILING: Self = Self { x: 1.0, y: 0.5 };
}

/// Start and end of a linear gradient within a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDirection {
    pub start: UnitPoint,
    pub end: UnitPoint,
}

impl GradientDirection {
    /// Leading edge to trailing edge
    pub const HORIZONTAL: Self = Self {
        start: UnitPoint::LEADING,
        end: UnitPoint::TRAILING,
    };

    /// Direction of the animated gradient at `phase` in `0.0..1.0`.
    ///
    /// Phase 0 runs trailing → leading; the direction cross-fades linearly
    /// until it runs leading → trailing at the end of the period.
    pub fn at_phase(phase: f32) -> Self {
        let t = phase.clamp(0.0, 1.0);
        Self {
            start: UnitPoint { x: 1.0 - t, y: 0.5 },
            end: UnitPoint { x: t, y: 0.5 },
        }
    }
}

/// Fraction of the current period elapsed, in `0.0..1.0`
pub fn phase_at(elapsed: Duration, period: Duration) -> f32 {
    let period = period.as_secs_f32();
    if period <= 0.0 {
        return 0.0;
    }
    (elapsed.as_secs_f32() % period) / period
}

struct AnimationInner {
    period: Duration,
    phase: Arc<watch::Sender<f32>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for AnimationInner {
    fn drop(&mut self) {
        if let Ok(task) = self.task.get_mut() {
            if let Some(task) = task.take() {
                task.abort();
            }
        }
    }
}

/// Infinitely repeating, non-reversing gradient animation.
///
/// Cloning shares the animation. The scheduled task starts on
/// [`start`](Self::start) and is aborted when the last clone is dropped.
#[derive(Clone)]
pub struct GradientAnimation {
    inner: Arc<AnimationInner>,
}

impl GradientAnimation {
    /// Create a stopped animation with the default period
    pub fn new() -> Self {
        Self::with_period(ANIMATION_PERIOD)
    }

    /// Create a stopped animation with a custom period
    pub fn with_period(period: Duration) -> Self {
        let (phase, _) = watch::channel(0.0);
        Self {
            inner: Arc::new(AnimationInner {
                period,
                phase: Arc::new(phase),
                task: Mutex::new(None),
            }),
        }
    }

    /// Start the repeating task. Idempotent.
    ///
    /// # Returns
    /// `true` if the task was started by this call. Outside a tokio runtime
    /// nothing is started and the gradient stays at phase 0.
    pub fn start(&self) -> bool {
        let Ok(mut task) = self.inner.task.lock() else {
            return false;
        };
        if task.is_some() {
            return false;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                debug!("No async runtime, gradient animation stays still");
                return false;
            }
        };

        let phase = Arc::clone(&self.inner.phase);
        let period = self.inner.period;
        *task = Some(runtime.spawn(async move {
            let started = Instant::now();
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                phase.send_replace(phase_at(started.elapsed(), period));
            }
        }));

        true
    }

    /// Check whether the repeating task has been started
    pub fn is_running(&self) -> bool {
        self.inner
            .task
            .lock()
            .map(|task| task.is_some())
            .unwrap_or(false)
    }

    /// Current phase in `0.0..1.0`
    pub fn phase(&self) -> f32 {
        *self.inner.phase.borrow()
    }

    /// Observe phase updates, e.g. to schedule redraws
    pub fn subscribe(&self) -> watch::Receiver<f32> {
        self.inner.phase.subscribe()
    }

    /// Gradient direction for the current phase
    pub fn direction(&self) -> GradientDirection {
        GradientDirection::at_phase(self.phase())
    }

    pub fn period(&self) -> Duration {
        self.inner.period
    }
}

impl Default for GradientAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GradientAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientAnimation")
            .field("period", &self.inner.period)
            .field("phase", &self.phase())
            .field("running", &self.is_running())
            .finish()
    }
}
