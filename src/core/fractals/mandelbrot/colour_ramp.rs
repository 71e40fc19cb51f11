use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

/// Rounds and saturates a computed channel value into a byte.
#[inline]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Banded ramp over raw escape counts. Points in the set are opaque black and
/// anything past the last band keeps using the last band's formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandedColourRamp;

impl BandedColourRamp {
    #[must_use]
    pub fn colour_for(result: EscapeResult) -> Colour {
        let iterations = match result {
            EscapeResult::InSet => return Colour::OPAQUE_BLACK,
            EscapeResult::Escaped(iterations) => iterations.get(),
        };
        let r = f64::from(iterations);

        match iterations {
            1..=10 => Colour {
                r: 50,
                g: channel(r * 5.0),
                b: channel(r * 15.0),
                a: channel((r / 10.0 + 0.1) * 255.0),
            },
            11..=100 => Colour {
                r: channel(r * 2.0),
                g: if iterations > 45 { 90 } else { 70 },
                b: channel(100.0 + r),
                a: channel((0.2 + r / 20.0) * 255.0),
            },
            101..=1000 => Colour {
                r: 40,
                g: 80,
                b: channel(r / 5.0),
                a: channel((0.4 + r / 2000.0) * 255.0),
            },
            _ => Colour {
                r: 140,
                g: 120,
                b: channel(r / 50.0),
                a: channel((0.4 + r / 10000.0) * 255.0),
            },
        }
    }
}

impl ColourMap for BandedColourRamp {
    #[inline]
    fn map(&self, result: EscapeResult) -> Colour {
        Self::colour_for(result)
    }

    fn display_name(&self) -> &str {
        "Banded"
    }
}
