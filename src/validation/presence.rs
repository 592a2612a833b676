//! Presence checks over structurally different optional slots.

/// Anything that can be absent.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

pub fn present_count(slots: &[&dyn Presence]) -> usize {
    slots.iter().filter(|slot| slot.is_present()).count()
}

pub fn all_absent(slots: &[&dyn Presence]) -> bool {
    present_count(slots) == 0
}

pub fn more_than_one_present(slots: &[&dyn Presence]) -> bool {
    present_count(slots) > 1
}
