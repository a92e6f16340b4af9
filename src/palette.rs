use thiserror::Error;

use crate::color::{Color, ColorSource};

/// Number of swatches in a palette.
pub const SLOT_COUNT: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("slot index {index} out of range (expected 0..{})", SLOT_COUNT)]
    SlotOutOfRange { index: usize },
}

/// One palette position: a color plus whether regeneration may replace it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub color: Color,
    pub locked: bool,
}

/// Eight slots, leftmost is index 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    slots: [Slot; SLOT_COUNT],
}

impl Palette {
    /// Fresh palette, everything unlocked.
    pub fn new(source: &mut impl ColorSource) -> Self {
        let slots = std::array::from_fn(|_| Slot {
            color: source.sample(),
            locked: false,
        });
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn locked_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.locked).count()
    }

    /// Flips the lock on `index` and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, PaletteError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(PaletteError::SlotOutOfRange { index })?;
        slot.locked = !slot.locked;
        Ok(slot.locked)
    }

    /// Replaces the color of every unlocked slot and returns how many changed.
    ///
    /// All new colors are drawn before any slot is written, so a failing
    /// source leaves the palette as it was.
    pub fn regenerate(&mut self, source: &mut impl ColorSource) -> usize {
        let fresh: [Option<Color>; SLOT_COUNT] =
            std::array::from_fn(|i| (!self.slots[i].locked).then(|| source.sample()));

        let mut replaced = 0;
        for (slot, color) in self.slots.iter_mut().zip(fresh) {
            if let Some(color) = color {
                slot.color = color;
                replaced += 1;
            }
        }
        replaced
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::color::ColorSampler;

    /// Hands out a fixed list of colors in order, cycling when exhausted.
    pub(crate) struct ScriptedSource {
        colors: Vec<Color>,
        next: usize,
    }

    impl ScriptedSource {
        pub(crate) fn new(colors: Vec<Color>) -> Self {
            Self { colors, next: 0 }
        }

        pub(crate) fn drawn(&self) -> usize {
            self.next
        }
    }

    impl ColorSource for ScriptedSource {
        fn sample(&mut self) -> Color {
            let color = self.colors[self.next % self.colors.len()];
            self.next += 1;
            color
        }
    }

    fn gray(level: u8) -> Color {
        Color::new(level, level, level)
    }

    #[test]
    fn new_palette_is_unlocked_and_bright() {
        let mut sampler = ColorSampler::from_seed(7);
        let palette = Palette::new(&mut sampler);
        assert_eq!(palette.slots().len(), SLOT_COUNT);
        assert_eq!(palette.locked_count(), 0);
        for slot in palette.slots() {
            assert!(!slot.locked);
            assert!(slot.color.is_bright_enough());
        }
    }

    #[test]
    fn toggle_lock_twice_restores_state() {
        let mut palette = Palette::new(&mut ColorSampler::from_seed(1));
        let before = palette.clone();

        assert_eq!(palette.toggle_lock(3), Ok(true));
        assert!(palette.slot(3).unwrap().locked);
        assert_eq!(palette.toggle_lock(3), Ok(false));
        assert!(!palette.slot(3).unwrap().locked);

        assert_eq!(palette, before);
    }

    #[test]
    fn toggle_lock_does_not_touch_colors() {
        let mut palette = Palette::new(&mut ColorSampler::from_seed(2));
        let colors: Vec<Color> = palette.slots().iter().map(|s| s.color).collect();
        palette.toggle_lock(5).unwrap();
        let after: Vec<Color> = palette.slots().iter().map(|s| s.color).collect();
        assert_eq!(colors, after);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_mutation() {
        let mut palette = Palette::new(&mut ColorSampler::from_seed(3));
        let before = palette.clone();

        assert_eq!(
            palette.toggle_lock(8),
            Err(PaletteError::SlotOutOfRange { index: 8 })
        );
        assert_eq!(
            palette.toggle_lock(usize::MAX),
            Err(PaletteError::SlotOutOfRange { index: usize::MAX })
        );
        assert_eq!(palette, before);
    }

    #[test]
    fn regenerate_replaces_only_unlocked_slots() {
        let initial: Vec<Color> = (0..8).map(|i| gray(100 + i)).collect();
        let mut palette = Palette::new(&mut ScriptedSource::new(initial.clone()));
        for index in [0, 2, 4, 6] {
            palette.toggle_lock(index).unwrap();
        }

        let sentinels: Vec<Color> = (0..4).map(|i| gray(200 + i)).collect();
        let mut source = ScriptedSource::new(sentinels.clone());
        let replaced = palette.regenerate(&mut source);

        assert_eq!(replaced, 4);
        assert_eq!(source.drawn(), 4);
        for index in [0, 2, 4, 6] {
            let slot = palette.slot(index).unwrap();
            assert_eq!(slot.color, initial[index]);
            assert!(slot.locked);
        }
        for (n, index) in [1, 3, 5, 7].into_iter().enumerate() {
            let slot = palette.slot(index).unwrap();
            assert_eq!(slot.color, sentinels[n]);
            assert!(!slot.locked);
        }
    }

    #[test]
    fn regenerate_with_everything_locked_draws_nothing() {
        let mut palette = Palette::new(&mut ColorSampler::from_seed(4));
        for index in 0..SLOT_COUNT {
            palette.toggle_lock(index).unwrap();
        }
        let before = palette.clone();
        let mut source = ScriptedSource::new(vec![gray(250)]);

        assert_eq!(palette.regenerate(&mut source), 0);
        assert_eq!(source.drawn(), 0);
        assert_eq!(palette, before);
    }

    #[test]
    fn regenerated_colors_stay_bright() {
        let mut sampler = ColorSampler::from_seed(5);
        let mut palette = Palette::new(&mut sampler);
        palette.toggle_lock(1).unwrap();
        for _ in 0..50 {
            assert_eq!(palette.regenerate(&mut sampler), SLOT_COUNT - 1);
            assert!(palette.slots().iter().all(|s| s.color.is_bright_enough()));
            assert_eq!(palette.locked_count(), 1);
        }
    }

    /// Panics on the given draw, like an unavailable entropy source would.
    struct FailingSource {
        fail_on: usize,
        drawn: usize,
    }

    impl ColorSource for FailingSource {
        fn sample(&mut self) -> Color {
            self.drawn += 1;
            if self.drawn == self.fail_on {
                panic!("randomness unavailable");
            }
            gray(180)
        }
    }

    #[test]
    fn regenerate_failing_mid_batch_leaves_palette_unchanged() {
        let mut palette = Palette::new(&mut ScriptedSource::new(vec![gray(120)]));
        palette.toggle_lock(1).unwrap();
        let before = palette.clone();

        let mut source = FailingSource {
            fail_on: 3,
            drawn: 0,
        };
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            palette.regenerate(&mut source)
        }));

        assert!(outcome.is_err());
        assert_eq!(source.drawn, 3);
        assert_eq!(palette, before);
    }

    #[test]
    fn error_message_names_the_index() {
        let err = PaletteError::SlotOutOfRange { index: 9 };
        assert_eq!(err.to_string(), "slot index 9 out of range (expected 0..8)");
    }
}
