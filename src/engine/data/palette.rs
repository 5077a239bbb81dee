use crate::engine::data::colour::Colour;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_ANCHORS: usize = 2;
pub const DEFAULT_PALETTE_ID: &str = "electric";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("palette '{id}' needs at least 2 colours, got {count}")]
    TooFewAnchors { id: String, count: usize },
    #[error("colour shift must be finite: {0}")]
    NonFiniteShift(f64),
}

/// An ordered ring of anchor colours. Interpolation runs from each anchor to
/// the next and wraps from the last back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct Palette {
    id: String,
    name: String,
    colours: Vec<Colour>,
}

#[derive(Deserialize)]
struct RawPalette {
    id: String,
    #[serde(default)]
    name: Option<String>,
    colours: Vec<Colour>,
}

impl TryFrom<RawPalette> for Palette {
    type Error = PaletteError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        let name = raw.name.unwrap_or_else(|| raw.id.clone());
        Self::new(raw.id, name, raw.colours)
    }
}

static FACTORY_DEFAULTS: LazyLock<Vec<Palette>> = LazyLock::new(|| {
    vec![
        Palette::builtin(
            "electric",
            "Electric Blue",
            &[
                [0, 7, 100],
                [32, 107, 203],
                [237, 255, 255],
                [255, 170, 0],
                [0, 2, 0],
            ],
        ),
        Palette::builtin(
            "fire",
            "Hellfire",
            &[
                [0, 0, 0],
                [60, 10, 0],
                [200, 100, 0],
                [255, 200, 50],
                [255, 255, 200],
            ],
        ),
        Palette::builtin(
            "psych",
            "Psychedelic Purple",
            &[
                [50, 0, 100],
                [0, 200, 200],
                [200, 0, 200],
                [255, 255, 0],
                [20, 0, 50],
            ],
        ),
        Palette::builtin(
            "greyscale",
            "Deep Grey",
            &[
                [0, 0, 0],
                [50, 50, 50],
                [150, 150, 150],
                [255, 255, 255],
                [20, 20, 20],
            ],
        ),
        Palette::builtin(
            "rainbow",
            "Full Spectrum",
            &[
                [255, 0, 0],
                [255, 255, 0],
                [0, 255, 0],
                [0, 255, 255],
                [0, 0, 255],
                [255, 0, 255],
            ],
        ),
    ]
});

impl Palette {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        colours: Vec<Colour>,
    ) -> Result<Self, PaletteError> {
        let id = id.into();

        if colours.len() < MIN_ANCHORS {
            return Err(PaletteError::TooFewAnchors {
                id,
                count: colours.len(),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            colours,
        })
    }

    fn builtin(id: &str, name: &str, anchors: &[[u8; 3]]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            colours: anchors.iter().copied().map(Colour::from).collect(),
        }
    }

    /// The palettes built into the binary, default first.
    #[must_use]
    pub fn factory_defaults() -> &'static [Palette] {
        &FACTORY_DEFAULTS
    }

    #[must_use]
    pub fn find(id: &str) -> Option<&'static Palette> {
        Self::factory_defaults().iter().find(|palette| palette.id == id)
    }

    /// Like [`Palette::find`], falling back to the first built-in palette.
    #[must_use]
    pub fn find_or_default(id: &str) -> &'static Palette {
        Self::find(id).unwrap_or(&FACTORY_DEFAULTS[0])
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    // Never true: construction requires MIN_ANCHORS colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

/// Cyclic offset into a palette, always in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct ColourShift(f64);

impl ColourShift {
    /// Wraps any finite value onto `[0, 1)`.
    pub fn new(value: f64) -> Result<Self, PaletteError> {
        if !value.is_finite() {
            return Err(PaletteError::NonFiniteShift(value));
        }

        let wrapped = value.rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        Ok(Self(if wrapped >= 1.0 { 0.0 } else { wrapped }))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
