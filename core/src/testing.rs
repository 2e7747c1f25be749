//! Test doubles for the presenter and scheduler capabilities.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::time::Duration;

use crate::*;

/// Keeps track of which handles currently show their number and which are enabled, handles are plain counters that
/// keep increasing across games.
#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    next_handle: u32,
    pub cleared: usize,
    pub layouts: usize,
    pub repositions: usize,
    pub shown: Vec<u32>,
    pub enabled: Vec<u32>,
    pub messages: Vec<Message>,
}

impl RecordingPresenter {
    fn add_all(list: &mut Vec<u32>, handles: &[u32]) {
        for &handle in handles {
            if !list.contains(&handle) {
                list.push(handle);
            }
        }
        list.sort_unstable();
    }

    fn remove_all(list: &mut Vec<u32>, handles: &[u32]) {
        list.retain(|handle| !handles.contains(handle));
    }
}

impl Presenter for RecordingPresenter {
    type Handle = u32;

    fn clear_slots(&mut self) {
        self.cleared += 1;
        self.shown.clear();
        self.enabled.clear();
    }

    fn create_slots(&mut self, n: SlotCount) -> Vec<u32> {
        let start = self.next_handle;
        self.next_handle += u32::from(n);
        (start..self.next_handle).collect()
    }

    fn layout(&mut self, _handles: &[u32]) {
        self.layouts += 1;
    }

    fn show_numbers(&mut self, handles: &[u32]) {
        Self::add_all(&mut self.shown, handles);
    }

    fn hide_numbers(&mut self, handles: &[u32]) {
        Self::remove_all(&mut self.shown, handles);
    }

    fn reposition_randomly(&mut self, _handles: &[u32]) {
        self.repositions += 1;
    }

    fn enable(&mut self, handles: &[u32]) {
        Self::add_all(&mut self.enabled, handles);
    }

    fn disable(&mut self, handles: &[u32]) {
        Self::remove_all(&mut self.enabled, handles);
    }

    fn show_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn clear_message(&mut self) {
        self.messages.clear();
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ScheduledTimer {
    Once(Duration, TimerKind),
    Every(Duration, TimerKind),
}

#[derive(Debug)]
struct Entry {
    timer: ScheduledTimer,
    event: TimerEvent,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler that never fires on its own, tests pull events out and feed them to the engine.
#[derive(Clone, Debug, Default)]
pub(crate) struct ManualScheduler {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl ManualScheduler {
    fn push(&mut self, timer: ScheduledTimer, event: TimerEvent) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.borrow_mut().push(Entry {
            timer,
            event,
            cancelled: cancelled.clone(),
        });
        ManualHandle { cancelled }
    }

    /// Timers that were scheduled and not cancelled yet.
    pub fn live(&self) -> Vec<ScheduledTimer> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .map(|entry| entry.timer)
            .collect()
    }

    pub fn next_live(&self) -> Option<TimerEvent> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| !entry.cancelled.get())
            .map(|entry| entry.event)
    }

    /// Every event ever scheduled, cancelled or not.
    pub fn all(&self) -> Vec<TimerEvent> {
        self.entries.borrow().iter().map(|entry| entry.event).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn once(&mut self, delay: Duration, event: TimerEvent) -> ManualHandle {
        self.push(ScheduledTimer::Once(delay, event.kind), event)
    }

    fn every(&mut self, period: Duration, event: TimerEvent) -> ManualHandle {
        self.push(ScheduledTimer::Every(period, event.kind), event)
    }
}

#[derive(Debug)]
pub(crate) struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}
