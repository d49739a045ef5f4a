use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::color::ColorDef;

/// Supplies one fill color per drawn rectangle.
pub trait ColorSource {
    /// Next fill color. Called once per record, in draw order.
    fn next_fill(&mut self) -> ColorDef;
}

/// Uniformly random opaque fills: r, g and b are independent draws from `[0, 1)`.
#[derive(Clone, Debug)]
pub struct RandomPalette {
    rng: StdRng,
}

impl RandomPalette {
    /// Unseeded palette; colors differ from run to run.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic palette for reproducible plots.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from entropy.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl ColorSource for RandomPalette {
    fn next_fill(&mut self) -> ColorDef {
        let r = self.rng.random::<f64>();
        let g = self.rng.random::<f64>();
        let b = self.rng.random::<f64>();
        ColorDef::rgb(r, g, b)
    }
}

/// Cycles through a fixed list. Handy for tests and for stable legends.
#[derive(Clone, Debug)]
pub struct FixedPalette {
    colors: Vec<ColorDef>,
    next: usize,
}

impl FixedPalette {
    /// `colors` must be non-empty; an empty list yields black fills.
    pub fn new(colors: Vec<ColorDef>) -> Self {
        Self { colors, next: 0 }
    }
}

impl ColorSource for FixedPalette {
    fn next_fill(&mut self) -> ColorDef {
        if self.colors.is_empty() {
            return ColorDef::BLACK;
        }
        let c = self.colors[self.next % self.colors.len()];
        self.next = self.next.wrapping_add(1);
        c
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
