//! `embedded-graphics` support
//!
//! Lets any `embedded-graphics` drawable render into the SSD1306
//! framebuffer. Unlike the driver's own primitives, pixels outside the
//! panel are dropped here, so this is the safe entry point for coordinates
//! that come from outside the firmware.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use super::ssd1306::Ssd1306;

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x), Ok(y)) = (u8::try_from(coord.x), u8::try_from(coord.y)) else {
                continue;
            };
            if self.contains(x, y) {
                self.set_pixel(x, y, color.is_on());
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Ssd1306Config;
    use crate::testing::RecordingI2c;
    use embedded_graphics::geometry::Point;
    use embedded_graphics::Drawable;

    fn display() -> Ssd1306<RecordingI2c> {
        Ssd1306::init(RecordingI2c::default(), Ssd1306Config::default()).unwrap()
    }

    #[test]
    fn test_size() {
        assert_eq!(display().size(), Size::new(128, 64));
    }

    #[test]
    fn test_draws_pixels() {
        let mut display = display();

        Pixel(Point::new(3, 4), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        assert!(display.pixel(3, 4));

        Pixel(Point::new(3, 4), BinaryColor::Off)
            .draw(&mut display)
            .unwrap();
        assert!(!display.pixel(3, 4));
    }

    #[test]
    fn test_clips_off_panel() {
        let mut display = display();
        let before = display.framebuffer().to_vec();

        let outside = [
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, -1), BinaryColor::On),
            Pixel(Point::new(128, 0), BinaryColor::On),
            Pixel(Point::new(0, 64), BinaryColor::On),
            Pixel(Point::new(1000, 1000), BinaryColor::On),
        ];
        display.draw_iter(outside).unwrap();

        assert_eq!(display.framebuffer(), &before[..]);
    }

    #[test]
    fn test_clear() {
        let mut display = display();

        display.clear(BinaryColor::On).unwrap();
        assert!(display.framebuffer()[1..].iter().all(|&b| b == 0xFF));
        assert_eq!(display.framebuffer()[0], 0x40);
    }
}
