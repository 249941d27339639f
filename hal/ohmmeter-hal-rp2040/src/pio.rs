//! WS2812 PIO timing
//!
//! One data bit takes `T1 + T2 + T3` PIO cycles:
//!
//! ```text
//!   |<- T1 ->|<---- T2 ---->|<- T3 ->|
//!    ‾‾‾‾‾‾‾‾ ‾‾‾‾‾‾‾‾‾‾‾‾‾‾ ________   bit 1
//!    ‾‾‾‾‾‾‾‾ ______________ ________   bit 0
//! ```
//!
//! The PIO clock runs at `BIT_RATE_HZ * CYCLES_PER_BIT`, so the divider is
//! `SYS_CLK / (BIT_RATE_HZ * CYCLES_PER_BIT)`.

/// Cycles the line is high for every bit
pub const T1: u32 = 2;

/// Cycles the line stays high for a 1 bit (low for a 0 bit)
pub const T2: u32 = 5;

/// Cycles the line is low at the end of every bit
pub const T3: u32 = 3;

/// PIO cycles per data bit
pub const CYCLES_PER_BIT: u32 = T1 + T2 + T3;

/// WS2812 data rate
pub const BIT_RATE_HZ: u32 = 800_000;

/// Bits in one colour word (GRB, 8 bits each)
pub const BITS_PER_PIXEL: u8 = 24;

/// Calculate the clock divider for the WS2812 bit rate
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn ws2812_clock_divider(sys_clk_hz: u32) -> (u16, u8) {
    // divider * 256 = (SYS_CLK * 256) / (bit_rate * cycles)
    let divisor = (BIT_RATE_HZ * CYCLES_PER_BIT) as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / divisor;

    let int_part = (divider_x256 / 256).min(0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    (int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_at_128mhz() {
        assert_eq!(ws2812_clock_divider(128_000_000), (16, 0));
    }

    #[test]
    fn test_divider_at_125mhz() {
        // 15.625
        assert_eq!(ws2812_clock_divider(125_000_000), (15, 160));
    }

    #[test]
    fn test_divider_extremes() {
        assert_eq!(ws2812_clock_divider(u32::MAX).0, 536);
        assert_eq!(ws2812_clock_divider(0), (0, 0));
    }
}
