use crate::engine::actions::ports::colour_map::ColourMap;
use crate::engine::data::colour::Colour;
use crate::engine::data::palette::{ColourShift, Palette};

/// How many times the gradient wraps around the palette over `0..max`.
const REPEAT_FACTOR: f64 = 2.0;

/// Colour for an iteration result. Interior points (`iterations ==
/// max_iterations`) are black; everything else is a linear blend between
/// two neighbouring palette anchors.
#[must_use]
pub fn colour_of(
    iterations: u32,
    max_iterations: u32,
    palette: &Palette,
    shift: ColourShift,
) -> Colour {
    if iterations == max_iterations {
        return Colour::BLACK;
    }

    let colours = palette.colours();
    let len = colours.len();

    let t = (f64::from(iterations) / f64::from(max_iterations) + shift.value()) % 1.0;
    let scaled_t = t * (len - 1) as f64 * REPEAT_FACTOR;
    let whole = scaled_t.floor();
    let fraction = scaled_t - whole;

    let index = whole as usize % len;
    let next = (index + 1) % len;

    lerp(colours[index], colours[next], fraction)
}

fn lerp(from: Colour, to: Colour, fraction: f64) -> Colour {
    Colour {
        r: lerp_channel(from.r, to.r, fraction),
        g: lerp_channel(from.g, to.g, fraction),
        b: lerp_channel(from.b, to.b, fraction),
    }
}

fn lerp_channel(from: u8, to: u8, fraction: f64) -> u8 {
    let from = f64::from(from);
    let value = from + (f64::from(to) - from) * fraction;

    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// [`ColourMap`] over a palette with a fixed shift and iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColourMap<'a> {
    palette: &'a Palette,
    shift: ColourShift,
    max_iterations: u32,
}

impl<'a> PaletteColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, shift: ColourShift, max_iterations: u32) -> Self {
        Self {
            palette,
            shift,
            max_iterations,
        }
    }
}

impl ColourMap for PaletteColourMap<'_> {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        colour_of(iterations, self.max_iterations, self.palette, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::new(
            "bw",
            "Black and White",
            vec![Colour::new(0, 0, 0), Colour::new(255, 255, 255)],
        )
        .unwrap()
    }

    fn no_shift() -> ColourShift {
        ColourShift::default()
    }

    #[test]
    fn test_interior_is_black_for_every_palette() {
        for palette in Palette::factory_defaults() {
            for shift in [0.0, 0.3, 0.99] {
                let shift = ColourShift::new(shift).unwrap();
                assert_eq!(colour_of(64, 64, palette, shift), Colour::BLACK);
            }
        }
    }

    #[test]
    fn test_quarter_way_is_mid_grey() {
        // t = 0.25, repeated twice over one segment: fraction 0.5 -> 127.5
        let colour = colour_of(25, 100, &black_white(), no_shift());

        assert_eq!(colour, Colour::new(128, 128, 128));
    }

    #[test]
    fn test_zero_iterations_is_first_anchor() {
        let palette = Palette::find("rainbow").unwrap();

        assert_eq!(colour_of(0, 100, palette, no_shift()), palette.colours()[0]);
    }

    #[test]
    fn test_wraps_from_last_anchor_to_first() {
        // t = 0.5 -> scaled 1.0 -> index 1 (white), next wraps to black
        let palette = black_white();

        assert_eq!(colour_of(50, 100, &palette, no_shift()), Colour::new(255, 255, 255));
        assert_eq!(colour_of(75, 100, &palette, no_shift()), Colour::new(128, 128, 128));
    }

    #[test]
    fn test_shift_offsets_the_gradient() {
        let palette = black_white();
        let shift = ColourShift::new(0.25).unwrap();

        assert_eq!(
            colour_of(0, 100, &palette, shift),
            colour_of(25, 100, &palette, no_shift())
        );
    }

    #[test]
    fn test_shift_wraps_past_one() {
        let palette = black_white();
        let shift = ColourShift::new(0.5).unwrap();

        // 0.75 + 0.5 wraps to 0.25
        assert_eq!(
            colour_of(75, 100, &palette, shift),
            colour_of(25, 100, &palette, no_shift())
        );
    }

    #[test]
    fn test_deterministic() {
        let palette = Palette::find("psych").unwrap();
        let shift = ColourShift::new(0.1).unwrap();

        for n in 0..64 {
            assert_eq!(colour_of(n, 64, palette, shift), colour_of(n, 64, palette, shift));
        }
    }

    #[test]
    fn test_colour_map_port_uses_max_iterations() {
        let palette = black_white();
        let map = PaletteColourMap::new(&palette, no_shift(), 100);

        assert_eq!(map.map(100), Colour::BLACK);
        assert_eq!(map.map(25), Colour::new(128, 128, 128));
    }
}
