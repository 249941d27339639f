//! Serpentine wiring of the LED grid
//!
//! The 5x5 grid is one continuous strip folded back on itself. The first
//! LED on the strip sits at the bottom-right corner; the strip then runs
//! right to left along the bottom row, left to right along the row above,
//! and so on:
//!
//! ```text
//!          col 0  1  2  3  4
//!  row 0     24 23 22 21 20   <- strip ends top-left
//!  row 1     15 16 17 18 19
//!  row 2     14 13 12 11 10
//!  row 3      5  6  7  8  9
//!  row 4      4  3  2  1  0   <- strip starts bottom-right
//! ```
//!
//! Put differently: rows are visited from the last to the first, rows with
//! an even index run from the last column to the first and odd rows run
//! forward.

/// Grid rows
pub const ROWS: usize = 5;

/// Grid columns
pub const COLS: usize = 5;

/// LEDs on the strip
pub const LED_COUNT: usize = ROWS * COLS;

/// Emission order for a serpentine grid
///
/// Entry `n` is the row-major logical index of the cell whose colour is
/// sent `n`-th. Cell indices must fit in a `u8`.
pub const fn serpentine_order<const N: usize, const R: usize, const C: usize>() -> [u8; N] {
    assert!(N == R * C);
    assert!(N <= 256);

    let mut order = [0u8; N];
    let mut slot = 0;
    let mut row = R;
    while row > 0 {
        row -= 1;
        let mut step = 0;
        while step < C {
            let col = if row % 2 == 0 { C - 1 - step } else { step };
            order[slot] = (row * C + col) as u8;
            slot += 1;
            step += 1;
        }
    }
    order
}

/// Emission order of the 5x5 matrix
pub const EMISSION_ORDER: [u8; LED_COUNT] = serpentine_order::<LED_COUNT, ROWS, COLS>();

/// Row-major index of a cell
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// Strip position of a logical cell index
pub fn physical_slot(logical: usize) -> Option<usize> {
    EMISSION_ORDER
        .iter()
        .position(|&cell| cell as usize == logical)
}
