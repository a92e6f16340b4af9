/// Color values and the brightness-constrained random sampler.
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Colors darker than this are rejected by the sampler.
pub const MIN_LUMA: f64 = 75.0;

/// An RGB triple. Colors are replaced, never edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance weighting of the three channels.
    pub fn luma(self) -> f64 {
        0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b)
    }

    pub fn is_bright_enough(self) -> bool {
        self.luma() >= MIN_LUMA
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Anything that can hand out palette colors.
pub trait ColorSource {
    fn sample(&mut self) -> Color;
}

impl<S: ColorSource + ?Sized> ColorSource for Box<S> {
    fn sample(&mut self) -> Color {
        (**self).sample()
    }
}

/// Draws uniform random colors, rejecting any below [`MIN_LUMA`].
pub struct ColorSampler<R> {
    rng: R,
}

impl<R: Rng> ColorSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ColorSampler<StdRng> {
    /// Deterministic sampler, same seed gives the same color sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::from_seed(seed)
    }
}

impl<R: Rng> ColorSource for ColorSampler<R> {
    fn sample(&mut self) -> Color {
        loop {
            let color = Color::new(self.rng.random(), self.rng.random(), self.rng.random());
            if color.is_bright_enough() {
                return color;
            }
        }
    }
}
