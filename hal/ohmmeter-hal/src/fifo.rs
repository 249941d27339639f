//! Timed serial output abstractions
//!
//! Self-clocked one-wire protocols (WS2812 and friends) are generated by a
//! dedicated hardware unit that shifts out words from a FIFO with fixed bit
//! timing. The CPU only ever pushes words; it never touches the pin.

/// Transmit FIFO of a timed serial output
pub trait TxFifo {
    /// Push one 32-bit word if there is room
    ///
    /// Returns `false`, with the word not queued, while the FIFO is full.
    fn try_push(&mut self, word: u32) -> bool;

    /// Push one 32-bit word, spinning while the FIFO is full
    ///
    /// There is no timeout: a stalled output blocks the caller.
    fn push_blocking(&mut self, word: u32) {
        while !self.try_push(word) {}
    }
}

impl<T: TxFifo + ?Sized> TxFifo for &mut T {
    fn try_push(&mut self, word: u32) -> bool {
        (**self).try_push(word)
    }

    fn push_blocking(&mut self, word: u32) {
        (**self).push_blocking(word)
    }
}

/// Errors bringing up a timed serial output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// The system clock could not be set to the frequency the bit timing needs
    ClockUnavailable,
    /// Every execution slot is already claimed
    NoFreeSlot,
    /// No room left for the bit-timing program
    ProgramSpace,
}

/// Source of timed serial outputs
///
/// Implementations own the execution slots of one hardware block and hand
/// out at most one [`TxFifo`] per slot.
pub trait ChannelProvider {
    /// Output handed out by [`claim`](Self::claim)
    type Channel: TxFifo;

    /// Pin type accepted by [`claim`](Self::claim)
    type Pin;

    /// Bring the system clock to `khz`
    ///
    /// Returns `false` if the clock cannot run at that frequency.
    fn set_system_clock_khz(&mut self, khz: u32) -> bool;

    /// Load the bit-timing program, claim a free slot and bind it to `pin`
    fn claim(&mut self, pin: Self::Pin) -> Result<Self::Channel, ChannelError>;
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::collections::VecDeque;
    use std::vec::Vec;

    /// FIFO of fixed depth whose output drains one word per rejected push
    struct ShiftingFifo {
        depth: usize,
        queue: VecDeque<u32>,
        sent: Vec<u32>,
        rejected: usize,
    }

    impl ShiftingFifo {
        fn new(depth: usize) -> Self {
            Self {
                depth,
                queue: VecDeque::new(),
                sent: Vec::new(),
                rejected: 0,
            }
        }

        fn drain(&mut self) {
            self.sent.extend(self.queue.drain(..));
        }
    }

    impl TxFifo for ShiftingFifo {
        fn try_push(&mut self, word: u32) -> bool {
            if self.queue.len() == self.depth {
                self.rejected += 1;
                if let Some(out) = self.queue.pop_front() {
                    self.sent.push(out);
                }
                return false;
            }
            self.queue.push_back(word);
            true
        }
    }

    #[test]
    fn test_push_blocking_waits_for_room() {
        let mut fifo = ShiftingFifo::new(8);
        let words: Vec<u32> = (1..=25).collect();

        for &w in &words {
            fifo.push_blocking(w);
        }
        fifo.drain();

        // Every word arrives once, in order, even though most pushes hit a
        // full FIFO
        assert_eq!(fifo.sent, words);
        assert_eq!(fifo.rejected, 17);
    }

    #[test]
    fn test_try_push_reports_full() {
        let mut fifo = ShiftingFifo::new(2);

        assert!(fifo.try_push(1));
        assert!(fifo.try_push(2));
        assert!(!fifo.try_push(3));
        assert_eq!(fifo.queue, [2]);
        assert_eq!(fifo.sent, [1]);
    }

    fn send_all<F: TxFifo>(mut fifo: F, words: &[u32]) {
        for &w in words {
            fifo.push_blocking(w);
        }
    }

    #[test]
    fn test_push_through_mut_ref() {
        let mut fifo = ShiftingFifo::new(1);
        send_all(&mut fifo, &[7, 8, 9]);
        fifo.drain();

        assert_eq!(fifo.sent, [7, 8, 9]);
        assert_eq!(fifo.rejected, 2);
    }
}
