//! Control state: sliders, presets and the shared control cell.

use std::cell::RefCell;
use std::rc::Rc;

/// A range slider bound to a shader parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    /// Label shown beside the slider
    pub label: &'static str,
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
    /// Step between selectable values
    pub step: f32,
    /// Initial value
    pub default: f32,
}

impl SliderSpec {
    /// Clamp `value` into `[min, max]` and snap it to the nearest step from `min`.
    ///
    /// Non-finite input yields the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.default;
        }
        let value = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Display text for `value` with as many decimals as the step needs.
    pub fn format(&self, value: f32) -> String {
        let decimals = if self.step >= 1.0 {
            0
        } else if self.step >= 0.1 {
            1
        } else {
            2
        };
        format!("{value:.decimals$}")
    }
}

/// A named preset value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset<T> {
    /// Button label
    pub name: &'static str,
    /// Value applied when selected
    pub value: T,
}

/// Clamp a preset index to the available presets.
pub fn preset_index<T>(index: usize, presets: &[Preset<T>]) -> usize {
    index.min(presets.len().saturating_sub(1))
}

/// Look up a preset, clamping out-of-range indices to the last one.
///
/// `None` only for an empty table.
pub fn select_preset<T>(index: usize, presets: &[Preset<T>]) -> Option<&Preset<T>> {
    presets.get(index).or(presets.last())
}

/// Single-slot mailbox shared between UI input and the frame loop.
///
/// Input handlers overwrite the slot; the frame loop reads the latest value
/// at the top of every tick. Both sides run on the same thread.
#[derive(Debug, Default)]
pub struct ControlCell<T>(Rc<RefCell<T>>);

impl<T> Clone for ControlCell<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> ControlCell<T> {
    /// Create a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Replace the current value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Modify the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }

    /// Read the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T: Clone> ControlCell<T> {
    /// Copy out the current value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: SliderSpec = SliderSpec {
        label: "Scale",
        min: 1.0,
        max: 10.0,
        step: 0.5,
        default: 3.0,
    };

    #[test]
    fn test_slider_clamps_to_range() {
        assert_eq!(SCALE.clamp(42.0), 10.0);
        assert_eq!(SCALE.clamp(-1.0), 1.0);
        assert_eq!(SCALE.clamp(f32::NAN), 3.0);
    }

    #[test]
    fn test_slider_snaps_to_step() {
        assert_eq!(SCALE.clamp(3.3), 3.5);
        assert_eq!(SCALE.clamp(3.2), 3.0);
    }

    #[test]
    fn test_slider_format() {
        assert_eq!(SCALE.format(3.5), "3.5");
        let orbs = SliderSpec { step: 1.0, ..SCALE };
        assert_eq!(orbs.format(4.0), "4");
    }

    #[test]
    fn test_preset_index_clamps() {
        let presets = [
            Preset { name: "a", value: 1 },
            Preset { name: "b", value: 2 },
        ];
        assert_eq!(select_preset(7, &presets).map(|p| p.name), Some("b"));
        assert_eq!(select_preset(0, &presets).map(|p| p.value), Some(1));
        assert_eq!(preset_index(7, &presets), 1);
    }

    #[test]
    fn test_empty_preset_table_has_no_selection() {
        let presets: [Preset<u8>; 0] = [];
        assert!(select_preset(0, &presets).is_none());
        assert_eq!(preset_index(3, &presets), 0);
    }

    #[test]
    fn test_cell_is_shared() {
        let writer = ControlCell::new(1.0_f32);
        let reader = writer.clone();
        writer.set(2.0);
        assert_eq!(reader.get(), 2.0);
        writer.update(|v| *v += 1.0);
        assert_eq!(reader.with(|v| *v), 3.0);
    }
}
