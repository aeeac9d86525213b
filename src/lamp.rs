//! Lamp hardware seam and color values.
//!
//! The commands paint into whatever implements [`LampStrip`]; the crate never
//! touches the pixel protocol itself. Colors cross the seam as [`Wrgb`], the
//! native four-channel value of the lamp's WRGB pixels. For animations that
//! are easier to think about in HSV (the `pattern` rainbow), [`hsv`]/[`hue`]
//! build a `palette::Srgb` which [`Wrgb::from_srgb`] quantizes down.

use palette::{FromColor, Hsv, Srgb};

/// One WRGB pixel value, one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wrgb {
    pub white: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Wrgb {
    /// All channels off.
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    /// Creates a pixel value from its four channels.
    pub const fn new(white: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            white,
            red,
            green,
            blue,
        }
    }

    /// Quantizes a 0.0-1.0 RGB color into the three color channels.
    ///
    /// The white channel is left off; `Srgb` carries no white information
    /// and mixing one in is the strip's own business.
    pub fn from_srgb(color: Srgb) -> Self {
        Self {
            white: 0,
            red: quantize(color.red),
            green: quantize(color.green),
            blue: quantize(color.blue),
        }
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Trait for abstracting the LED strip hardware.
///
/// Implement this for your pixel driver (PIO, SPI, bit-banged, etc.).
/// Writes land in the implementation's own buffer; `show` pushes the buffer
/// out to the physical strip. Handle any hardware errors internally - these
/// methods cannot fail.
pub trait LampStrip {
    /// Returns the number of pixels on the strip.
    fn len(&self) -> usize;

    /// Returns true if the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets one buffered pixel. `index` is in `0..len()`.
    fn set_pixel(&mut self, index: usize, color: Wrgb);

    /// Sets every buffered pixel to `color`.
    fn fill(&mut self, color: Wrgb) {
        for index in 0..self.len() {
            self.set_pixel(index, color);
        }
    }

    /// Pushes the buffered pixels out to the hardware.
    fn show(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_covers_the_full_range() {
        assert_eq!(Wrgb::from_srgb(Srgb::new(0.0, 0.0, 0.0)), Wrgb::OFF);
        assert_eq!(
            Wrgb::from_srgb(Srgb::new(1.0, 1.0, 1.0)),
            Wrgb::new(0, 255, 255, 255)
        );
        assert_eq!(
            Wrgb::from_srgb(Srgb::new(0.5, 0.0, 1.0)).red,
            128
        );
    }

    #[test]
    fn quantize_clamps_out_of_range_channels() {
        let color = Wrgb::from_srgb(Srgb::new(-0.5, 1.5, 0.0));
        assert_eq!(color.red, 0);
        assert_eq!(color.green, 255);
    }

    #[test]
    fn hue_wheel_hits_the_primaries() {
        assert_eq!(Wrgb::from_srgb(hue(0.0)), Wrgb::new(0, 255, 0, 0));
        assert_eq!(Wrgb::from_srgb(hue(120.0)), Wrgb::new(0, 0, 255, 0));
        assert_eq!(Wrgb::from_srgb(hue(240.0)), Wrgb::new(0, 0, 0, 255));
    }

    #[test]
    fn default_fill_paints_every_pixel() {
        struct Strip([Wrgb; 4]);
        impl LampStrip for Strip {
            fn len(&self) -> usize {
                self.0.len()
            }
            fn set_pixel(&mut self, index: usize, color: Wrgb) {
                self.0[index] = color;
            }
            fn show(&mut self) {}
        }

        let mut strip = Strip([Wrgb::OFF; 4]);
        let amber = Wrgb::new(0, 255, 120, 0);
        strip.fill(amber);
        assert!(strip.0.iter().all(|&pixel| pixel == amber));
    }
}
