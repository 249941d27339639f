//! SSD1306 OLED Display Driver
//!
//! Driver for SSD1306-based monochrome OLED panels on I2C. The complete
//! framebuffer is kept in RAM: drawing calls only edit the buffer and
//! [`Ssd1306::flush`] sends all of it in one blocking transfer.
//!
//! # Framebuffer layout
//!
//! The controller is put in vertical addressing mode, so it consumes one
//! column at a time, top page first. The buffer mirrors that stream:
//!
//! ```text
//! [0x40] [x0 p0] [x0 p1] .. [x0 pN] [x1 p0] .. [xW pN]
//! ```
//!
//! Pixel `(x, y)` lives in byte `1 + x * pages + (y >> 3)`, bit `y & 7`.
//! Byte 0 is the data-stream control byte and is never touched by drawing.
//!
//! # Coordinates
//!
//! Drawing primitives do not check coordinates against the panel size.
//! A `y` past the bottom edge lands in the next column; anything past the
//! end of the buffer panics. Callers that cannot guarantee bounds go through
//! [`Ssd1306::contains`] or the `embedded-graphics` target, which clips.

use alloc::vec::Vec;

use embedded_hal::i2c::I2c;

use super::font::{self, GLYPH_SIZE};

/// SSD1306 I2C address (0x3D with SA0 pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Advance of a space character
pub const SPACE_WIDTH: u8 = 3;

/// Blank columns between two glyphs
pub const GLYPH_SPACING: u8 = 2;

/// Control byte announcing a single command byte
const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a stream of GDDRAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_ENTIRE_ON: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEM_ADDR: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_OUT_DIR: u8 = 0xC0;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;

    pub const ADDR_MODE_VERTICAL: u8 = 0x01;
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ssd1306Config {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels, a multiple of 8
    pub height: u8,
    /// 7-bit I2C address
    pub address: u8,
    /// Panel is powered from an external VCC (charge pump stays off)
    pub external_vcc: bool,
}

impl Default for Ssd1306Config {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            address: DEFAULT_ADDRESS,
            external_vcc: false,
        }
    }
}

/// Errors reported by the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The framebuffer could not be allocated
    Allocation,
    /// Zero-sized panel, or a height that is not a multiple of 8
    Geometry,
    /// The I2C bus reported an error
    Bus(E),
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    width: u8,
    height: u8,
    pages: u8,
    external_vcc: bool,
    /// Control byte followed by `pages * width` bytes of pixel data
    buffer: Vec<u8>,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Allocate the framebuffer and run the power-on sequence
    ///
    /// The panel is left switched on with a cleared framebuffer in RAM; the
    /// panel's own memory is whatever it powered up with until the first
    /// [`flush`](Self::flush).
    pub fn init(i2c: I2C, config: Ssd1306Config) -> Result<Self, DisplayError<I2C::Error>> {
        let mut display = Self::new(i2c, config)?;
        display.power_on()?;

        Ok(display)
    }

    /// Allocate the framebuffer without touching the bus
    ///
    /// The panel stays unconfigured until [`power_on`](Self::power_on).
    /// Lets a caller keep the driver when the panel does not answer yet.
    pub fn new(i2c: I2C, config: Ssd1306Config) -> Result<Self, DisplayError<I2C::Error>> {
        if config.width == 0 || config.height == 0 || config.height % 8 != 0 {
            return Err(DisplayError::Geometry);
        }

        let pages = config.height / 8;
        let size = pages as usize * config.width as usize + 1;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| DisplayError::Allocation)?;
        buffer.resize(size, 0);
        buffer[0] = CONTROL_DATA;

        Ok(Self {
            i2c,
            address: config.address,
            width: config.width,
            height: config.height,
            pages,
            external_vcc: config.external_vcc,
            buffer,
        })
    }

    /// Run the power-on configuration sequence
    ///
    /// Stops at the first command the bus rejects. Safe to repeat.
    pub fn power_on(&mut self) -> Result<(), DisplayError<I2C::Error>> {
        let (precharge, charge_pump) = if self.external_vcc {
            (0x22, 0x10)
        } else {
            (0xF1, 0x14)
        };
        // Alternative COM pins for 2:1 and squarer panels, sequential for
        // the 4:1 strips.
        let com_pins = if self.width as u16 > 2 * self.height as u16 {
            0x02
        } else {
            0x12
        };

        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_ADDR,
            cmd::ADDR_MODE_VERTICAL,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_SEG_REMAP | 0x01, // Column 127 is SEG0
            cmd::SET_MUX_RATIO,
            self.height - 1,
            cmd::SET_COM_OUT_DIR | 0x08, // Scan from COM[N-1]
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            com_pins,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_PRECHARGE,
            precharge,
            cmd::SET_VCOM_DESELECT,
            0x30, // 0.83 x VCC
            cmd::SET_CONTRAST,
            0xFF,
            cmd::SET_ENTIRE_ON, // Follow RAM content
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            charge_pump,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError<I2C::Error>> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(DisplayError::Bus)
    }

    /// Send the whole framebuffer to the display
    ///
    /// Sets the column and page window to the full panel, then writes the
    /// buffer (control byte included) in a single transfer.
    pub fn flush(&mut self) -> Result<(), DisplayError<I2C::Error>> {
        self.command(cmd::SET_COL_ADDR)?;
        self.command(0)?;
        self.command(self.width - 1)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command(self.pages - 1)?;

        self.i2c
            .write(self.address, &self.buffer)
            .map_err(DisplayError::Bus)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError<I2C::Error>> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError<I2C::Error>> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError<I2C::Error>> {
        if inverted {
            self.command(cmd::SET_INVERSE)
        } else {
            self.command(cmd::SET_NORMAL)
        }
    }
}

impl<I2C> Ssd1306<I2C> {
    /// Panel width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u8 {
        self.pages
    }

    /// I2C address the driver talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Raw framebuffer, control byte included
    pub fn framebuffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Whether `(x, y)` is on the panel
    pub fn contains(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn locate(&self, x: u8, y: u8) -> (usize, u8) {
        let index = x as usize * self.pages as usize + (y >> 3) as usize + 1;
        (index, 1 << (y & 0b111))
    }

    /// Set or clear one pixel
    ///
    /// No bounds check beyond the buffer's own.
    #[inline]
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        let (index, mask) = self.locate(x, y);
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Read back one pixel
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let (index, mask) = self.locate(x, y);
        self.buffer[index] & mask != 0
    }

    /// Set every pixel to `on`
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        self.buffer[1..].fill(byte);
    }

    /// Draw a rectangle outline, optionally filling the inside
    ///
    /// The fill covers the interior only; the 1-pixel border is always
    /// drawn. A zero width or height draws nothing.
    pub fn draw_rect(&mut self, top: u8, left: u8, width: u8, height: u8, on: bool, filled: bool) {
        if width == 0 || height == 0 {
            return;
        }
        let right = left + (width - 1);
        let bottom = top + (height - 1);

        for x in left..=right {
            self.set_pixel(x, top, on);
            self.set_pixel(x, bottom, on);
        }
        for y in top..=bottom {
            self.set_pixel(left, y, on);
            self.set_pixel(right, y, on);
        }

        if filled {
            for x in left.saturating_add(1)..right {
                for y in top.saturating_add(1)..bottom {
                    self.set_pixel(x, y, on);
                }
            }
        }
    }

    /// Draw a line between two points, both ends included
    ///
    /// Integer Bresenham with a single error term. The endpoints are put in
    /// a canonical order first, so swapping them paints the same pixels.
    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, on: bool) {
        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };

        let (mut x, mut y) = (i32::from(x0), i32::from(y0));
        let (x1, y1) = (i32::from(x1), i32::from(y1));

        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };

        let mut err = dx - dy;

        loop {
            self.set_pixel(x as u8, y as u8, on);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive
    pub fn draw_hline(&mut self, x0: u8, x1: u8, y: u8, on: bool) {
        for x in x0..=x1 {
            self.set_pixel(x, y, on);
        }
    }

    /// Vertical line from `y0` to `y1` inclusive
    pub fn draw_vline(&mut self, x: u8, y0: u8, y1: u8, on: bool) {
        for y in y0..=y1 {
            self.set_pixel(x, y, on);
        }
    }

    /// Paint one character cell with its top-left corner at `(x, y)`
    ///
    /// The whole 8x8 cell is written, background included. Returns the
    /// index of the glyph's last lit column, the proportional advance
    /// before spacing. A space paints nothing and returns [`SPACE_WIDTH`].
    pub fn draw_char(&mut self, c: char, x: u8, y: u8) -> u8 {
        if c == ' ' {
            return SPACE_WIDTH;
        }

        let columns = font::glyph(c);
        for (i, &column) in (0..GLYPH_SIZE).zip(columns.iter()) {
            for j in 0..GLYPH_SIZE {
                self.set_pixel(x + i, y + j, column & (1 << j) != 0);
            }
        }

        font::trimmed_width(columns)
    }

    /// Lay out a string starting at `(x, y)`, wrapping at the right edge
    ///
    /// After each glyph the cursor advances by its width plus
    /// [`GLYPH_SPACING`]; once another cell would not fit it moves to the
    /// start of the next 8-pixel row. Text that would start on the last row
    /// or below is dropped. Returns the final cursor.
    pub fn draw_string(&mut self, text: &str, x: u8, y: u8) -> (u8, u8) {
        let width = u16::from(self.width);
        let height = u16::from(self.height);
        let cell = u16::from(GLYPH_SIZE);

        let (mut x, mut y) = (x, y);
        for c in text.chars() {
            if u16::from(y) + cell >= height {
                break;
            }

            let advance = self.draw_char(c, x, y);
            let next = u16::from(x) + u16::from(advance) + u16::from(GLYPH_SPACING);

            if next + cell >= width {
                x = 0;
                y += GLYPH_SIZE;
            } else {
                x = next as u8;
            }
        }

        (x, y)
    }
}
