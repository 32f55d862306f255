//! Random color-name picking.
//!
//! The fixed set of six color names lives in [`ColorName::ALL`] (and as plain
//! labels in [`COLOR_NAMES`]). [`NameProvider`] owns the set it picks from, so a
//! different (e.g. localized) set can be swapped in, and the random source can
//! be injected for deterministic tests.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the six color names a Stroop word or ink color is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    /// "yellow"
    Yellow,
    /// "red"
    Red,
    /// "blue"
    Blue,
    /// "green"
    Green,
    /// "orange"
    Orange,
    /// "violet"
    Violet,
}

impl ColorName {
    /// Every color name, in pick order.
    pub const ALL: [Self; 6] = [
        Self::Yellow,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Violet,
    ];

    /// Returns the lowercase label, which doubles as a CSS named color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Violet => "violet",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown color name '{wanted}'"))
    }
}

/// The six color names as labels, in the same order as [`ColorName::ALL`].
pub const COLOR_NAMES: [&str; 6] = [
    ColorName::Yellow.as_str(),
    ColorName::Red.as_str(),
    ColorName::Blue.as_str(),
    ColorName::Green.as_str(),
    ColorName::Orange.as_str(),
    ColorName::Violet.as_str(),
];

/// Maps a uniform draw in `[0, 1)` onto an index into a set of `len` entries.
///
/// Every index is equally likely for a uniform draw. A draw of exactly `1.0`
/// (or anything above) still lands on the last entry. An empty set yields `0`;
/// callers only pass lengths of sets that [`NameProvider::new`] accepted.
#[must_use]
pub(crate) fn index_for_draw(draw: f64, len: usize) -> usize {
    let scaled = (draw.max(0.0) * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

/// Picks a uniformly random color name using the process-wide generator.
pub fn pick_random_color_name() -> ColorName {
    pick_color_name_with(&mut rand::thread_rng())
}

/// Picks a uniformly random color name from the given generator.
pub fn pick_color_name_with<R: Rng + ?Sized>(rng: &mut R) -> ColorName {
    ColorName::ALL[index_for_draw(rng.gen::<f64>(), ColorName::ALL.len())]
}

/// Uniform picker over an owned, immutable set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameProvider {
    names: &'static [&'static str],
}

impl NameProvider {
    /// Creates a provider over a custom label set.
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty.
    pub fn new(names: &'static [&'static str]) -> Result<Self> {
        if names.is_empty() {
            anyhow::bail!("Name set cannot be empty");
        }
        Ok(Self { names })
    }

    /// Returns the label set this provider picks from.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Returns true if `label` is one of this provider's names.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.names.contains(&label)
    }

    /// Picks a label using the process-wide generator.
    pub fn pick(&self) -> &'static str {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks a label using the given generator.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.names[index_for_draw(rng.gen::<f64>(), self.names.len())]
    }
}

impl Default for NameProvider {
    fn default() -> Self {
        Self {
            names: &COLOR_NAMES,
        }
    }
}
