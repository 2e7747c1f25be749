use core::time::Duration;
use gloo::timers::callback::{Interval, Timeout};
use mnemo_core::{Scheduler, TimerEvent};
use yew::Callback;

/// Schedules engine timers on the browser event loop, fired events come back through `callback`.
pub(crate) struct GlooScheduler {
    callback: Callback<TimerEvent>,
}

impl GlooScheduler {
    pub(crate) fn new(callback: Callback<TimerEvent>) -> Self {
        Self { callback }
    }
}

/// Dropping it clears the underlying `setTimeout`/`setInterval`.
pub(crate) struct GlooTimer {
    _timeout: Option<Timeout>,
    _interval: Option<Interval>,
}

fn millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn once(&mut self, delay: Duration, event: TimerEvent) -> GlooTimer {
        let callback = self.callback.clone();
        GlooTimer {
            _timeout: Some(Timeout::new(millis(delay), move || callback.emit(event))),
            _interval: None,
        }
    }

    fn every(&mut self, period: Duration, event: TimerEvent) -> GlooTimer {
        let callback = self.callback.clone();
        GlooTimer {
            _timeout: None,
            _interval: Some(Interval::new(millis(period), move || callback.emit(event))),
        }
    }
}
