use crate::utils::js_random_seed;
use mnemo_core::{
    Extent, Message, Position, Presenter, Rgb, Scatter, SlotCount, row_layout,
};

/// Opaque reference to a rendered slot, unique for the lifetime of the page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SlotHandle(u32);

impl SlotHandle {
    pub(crate) const fn key(self) -> u32 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SlotView {
    pub handle: SlotHandle,
    pub label: u32,
    pub color: Rgb,
    pub position: Position,
    pub number_visible: bool,
    pub enabled: bool,
}

impl SlotView {
    pub(crate) fn style(&self, size: Extent) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px; background-color: {};",
            self.position.x, self.position.y, size.width, size.height, self.color
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SeedSource {
    /// Same seed for every game, for reproducing a layout.
    Forced(u64),
    Browser,
}

impl SeedSource {
    fn next_seed(self) -> u64 {
        match self {
            Self::Forced(seed) => seed,
            Self::Browser => js_random_seed(),
        }
    }
}

/// View model the game component renders from.
#[derive(Debug)]
pub(crate) struct BoardPresenter {
    slots: Vec<SlotView>,
    message: Option<Message>,
    area: Extent,
    slot_size: Extent,
    seeds: SeedSource,
    scatter: Scatter,
    next_handle: u32,
}

impl BoardPresenter {
    pub(crate) fn new(slot_size: Extent, seeds: SeedSource) -> Self {
        Self {
            slots: Vec::new(),
            message: None,
            area: Extent::default(),
            slot_size,
            seeds,
            scatter: Scatter::new(0),
            next_handle: 0,
        }
    }

    pub(crate) fn slots(&self) -> &[SlotView] {
        &self.slots
    }

    pub(crate) fn message(&self) -> Option<Message> {
        self.message
    }

    pub(crate) fn slot_size(&self) -> Extent {
        self.slot_size
    }

    /// Play area size as last measured from the DOM.
    pub(crate) fn set_area(&mut self, area: Extent) {
        self.area = area;
    }

    fn for_each_slot(&mut self, handles: &[SlotHandle], mut f: impl FnMut(&mut SlotView)) {
        self.slots
            .iter_mut()
            .filter(|slot| handles.contains(&slot.handle))
            .for_each(|slot| f(slot));
    }
}

impl Presenter for BoardPresenter {
    type Handle = SlotHandle;

    fn clear_slots(&mut self) {
        self.slots.clear();
    }

    fn create_slots(&mut self, n: SlotCount) -> Vec<SlotHandle> {
        self.scatter = Scatter::new(self.seeds.next_seed());

        let start = self.slots.len();
        for label in 1..=u32::from(n) {
            let handle = SlotHandle(self.next_handle);
            self.next_handle = self.next_handle.wrapping_add(1);
            self.slots.push(SlotView {
                handle,
                label,
                color: self.scatter.color(),
                position: Position::default(),
                number_visible: false,
                enabled: false,
            });
        }
        self.slots[start..].iter().map(|slot| slot.handle).collect()
    }

    fn layout(&mut self, handles: &[SlotHandle]) {
        let positions = row_layout(self.area.width, self.slot_size, handles.len());
        for (handle, position) in handles.iter().zip(positions) {
            self.for_each_slot(core::slice::from_ref(handle), |slot| slot.position = position);
        }
    }

    fn show_numbers(&mut self, handles: &[SlotHandle]) {
        self.for_each_slot(handles, |slot| slot.number_visible = true);
    }

    fn hide_numbers(&mut self, handles: &[SlotHandle]) {
        self.for_each_slot(handles, |slot| slot.number_visible = false);
    }

    fn reposition_randomly(&mut self, handles: &[SlotHandle]) {
        let Self {
            slots,
            scatter,
            area,
            slot_size,
            ..
        } = self;
        slots
            .iter_mut()
            .filter(|slot| handles.contains(&slot.handle))
            .for_each(|slot| slot.position = scatter.position(*area, *slot_size));
    }

    fn enable(&mut self, handles: &[SlotHandle]) {
        self.for_each_slot(handles, |slot| slot.enabled = true);
    }

    fn disable(&mut self, handles: &[SlotHandle]) {
        self.for_each_slot(handles, |slot| slot.enabled = false);
    }

    fn show_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}
