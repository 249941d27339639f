//! WS2812 LED matrix driver
//!
//! Streams a 5x5 [`ColorBuffer`] to a serpentine-wired WS2812 strip. The
//! caller owns the buffer and may edit it freely between draws; the driver
//! only reads it, walks it in strip order and pushes one encoded word per
//! LED into the transmit FIFO.
//!
//! # Usage
//!
//! ```ignore
//! let mut matrix = LedMatrix::init(&mut pio, pin)?;
//! let mut cells = blank_buffer();
//! cells[cell_index(2, 2)] = Color::RED.scale(ON_INTENSITY);
//! matrix.draw(&cells);
//! ```

use ohmmeter_hal::{ChannelError, ChannelProvider, TxFifo};

use super::color::Color;
use super::layout::{EMISSION_ORDER, LED_COUNT};

/// System clock the bit timing is derived from, in kHz
///
/// 128 MHz divides to the 8 MHz program clock (10 cycles per 800 kHz bit)
/// without a fractional part.
pub const SYS_CLOCK_KHZ: u32 = 128_000;

/// Colours of the 25 cells, row-major, row 0 at the top
pub type ColorBuffer = [Color; LED_COUNT];

/// A buffer with every cell off
pub const fn blank_buffer() -> ColorBuffer {
    [Color::BLACK; LED_COUNT]
}

/// 5x5 WS2812 matrix
pub struct LedMatrix<T> {
    tx: T,
    /// Logical cell sent at each strip position
    order: [u8; LED_COUNT],
}

impl<T> LedMatrix<T>
where
    T: TxFifo,
{
    /// Bring up the output and claim a channel driving `pin`
    ///
    /// Sets the system clock to [`SYS_CLOCK_KHZ`] first, since the bit
    /// timing program assumes it.
    pub fn init<P>(provider: &mut P, pin: P::Pin) -> Result<Self, ChannelError>
    where
        P: ChannelProvider<Channel = T>,
    {
        if !provider.set_system_clock_khz(SYS_CLOCK_KHZ) {
            return Err(ChannelError::ClockUnavailable);
        }
        let tx = provider.claim(pin)?;

        Ok(Self::new(tx))
    }

    /// Wrap an already claimed output
    pub fn new(tx: T) -> Self {
        Self {
            tx,
            order: EMISSION_ORDER,
        }
    }

    /// Send every cell to the strip
    ///
    /// Blocks until the last word is in the FIFO.
    pub fn draw(&mut self, buffer: &ColorBuffer) {
        for &cell in self.order.iter() {
            self.tx.push_blocking(buffer[cell as usize].encode());
        }
    }

    /// Switch every LED off
    pub fn clear(&mut self) {
        for _ in 0..LED_COUNT {
            self.tx.push_blocking(0);
        }
    }

    /// Give the output back
    pub fn release(self) -> T {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::layout::cell_index;
    use crate::testing::{MockProvider, RecordingFifo, ShallowFifo};
    use alloc::vec::Vec;

    fn gradient() -> ColorBuffer {
        let mut buffer = blank_buffer();
        for (i, cell) in buffer.iter_mut().enumerate() {
            *cell = Color::new(i as f32 * 0.04, 0.0, 1.0 - i as f32 * 0.04);
        }
        buffer
    }

    #[test]
    fn test_init_sets_clock_and_claims() {
        let mut provider = MockProvider::new(1);

        let matrix = LedMatrix::init(&mut provider, 7).unwrap();

        assert_eq!(provider.clock_khz, Some(128_000));
        assert_eq!(provider.claimed_pins, [7]);
        assert!(matrix.release().words.is_empty());
    }

    #[test]
    fn test_init_without_slot() {
        let mut provider = MockProvider::new(1);

        let _first = LedMatrix::init(&mut provider, 7).unwrap();
        let second = LedMatrix::init(&mut provider, 8);

        assert!(matches!(second, Err(ChannelError::NoFreeSlot)));
    }

    #[test]
    fn test_init_clock_failure() {
        let mut provider = MockProvider::new(1);
        provider.clock_ok = false;

        let result = LedMatrix::init(&mut provider, 7);

        assert!(matches!(result, Err(ChannelError::ClockUnavailable)));
        // Nothing claimed when the clock is wrong
        assert_eq!(provider.free_slots, 1);
    }

    #[test]
    fn test_uniform_buffer() {
        let mut matrix = LedMatrix::new(RecordingFifo::default());

        matrix.draw(&[Color::RED; LED_COUNT]);

        let words = matrix.release().words;
        assert_eq!(words.len(), 25);
        assert!(words.iter().all(|&w| w == 255 << 16));
    }

    #[test]
    fn test_serpentine_order() {
        let buffer = gradient();
        let mut matrix = LedMatrix::new(RecordingFifo::default());

        matrix.draw(&buffer);
        let words = matrix.release().words;

        // Bottom row right to left, then the row above left to right
        let expected: Vec<u32> = [
            (4, 4), (4, 3), (4, 2), (4, 1), (4, 0),
            (3, 0), (3, 1), (3, 2), (3, 3), (3, 4),
            (2, 4), (2, 3), (2, 2), (2, 1), (2, 0),
            (1, 0), (1, 1), (1, 2), (1, 3), (1, 4),
            (0, 4), (0, 3), (0, 2), (0, 1), (0, 0),
        ]
        .iter()
        .map(|&(row, col)| buffer[cell_index(row, col)].encode())
        .collect();

        assert_eq!(words, expected);
    }

    #[test]
    fn test_single_cell_position() {
        let mut buffer = blank_buffer();
        buffer[cell_index(0, 0)] = Color::GREEN;
        buffer[cell_index(4, 4)] = Color::BLUE;

        let mut matrix = LedMatrix::new(RecordingFifo::default());
        matrix.draw(&buffer);
        let words = matrix.release().words;

        assert_eq!(words[0], 0x0000_FF00);
        assert_eq!(words[24], 0xFF00_0000);
        assert!(words[1..24].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_buffer_reuse() {
        let mut buffer = blank_buffer();
        let mut fifo = RecordingFifo::default();
        let mut matrix = LedMatrix::new(&mut fifo);

        matrix.draw(&buffer);
        buffer[cell_index(4, 4)] = Color::WHITE;
        matrix.draw(&buffer);
        drop(matrix);

        assert_eq!(fifo.words.len(), 50);
        assert_eq!(fifo.words[0], 0);
        assert_eq!(fifo.words[25], 0xFFFF_FF00);
    }

    #[test]
    fn test_clear() {
        let mut matrix = LedMatrix::new(RecordingFifo::default());

        matrix.clear();

        let words = matrix.release().words;
        assert_eq!(words.len(), 25);
        assert!(words.iter().all(|&w| w == 0));
    }

    #[test]
    fn test_draw_through_shallow_fifo() {
        let buffer = gradient();

        let mut recorded = LedMatrix::new(RecordingFifo::default());
        recorded.draw(&buffer);
        let expected = recorded.release().words;

        // Eight-deep FIFO as on the PIO with a joined TX queue
        let mut matrix = LedMatrix::new(ShallowFifo::new(8));
        matrix.draw(&buffer);
        let fifo = matrix.release();

        assert_eq!(fifo.rejected, 17);
        assert_eq!(fifo.flushed(), expected);
    }

    #[test]
    fn test_clear_through_shallow_fifo() {
        let mut matrix = LedMatrix::new(ShallowFifo::new(8));

        matrix.clear();

        let words = matrix.release().flushed();
        assert_eq!(words.len(), 25);
        assert!(words.iter().all(|&w| w == 0));
    }
}
