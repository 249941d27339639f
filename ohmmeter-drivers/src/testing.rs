//! Recording stand-ins for the hardware, shared by the unit tests

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use ohmmeter_hal::{ChannelError, ChannelProvider, TxFifo};

/// I2C bus that records every write
#[derive(Default)]
pub struct RecordingI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
}

impl RecordingI2c {
    /// Command bytes of every `[0x80, cmd]` write, in order
    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.len() == 2 && bytes[0] == 0x80)
            .map(|(_, bytes)| bytes[1])
            .collect()
    }
}

impl ErrorType for RecordingI2c {
    type Error = Infallible;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

/// I2C bus where every transfer fails
pub struct FailingI2c;

impl ErrorType for FailingI2c {
    type Error = ErrorKind;
}

impl I2c for FailingI2c {
    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        Err(ErrorKind::Bus)
    }
}

/// Transmit FIFO that records every pushed word
#[derive(Default)]
pub struct RecordingFifo {
    pub words: Vec<u32>,
}

impl TxFifo for RecordingFifo {
    fn try_push(&mut self, word: u32) -> bool {
        self.words.push(word);
        true
    }
}

/// Transmit FIFO with a hardware-like depth
///
/// Rejects pushes while full; each rejected push shifts the oldest queued
/// word out to `sent`, standing in for the output draining.
pub struct ShallowFifo {
    pub depth: usize,
    pub queue: VecDeque<u32>,
    pub sent: Vec<u32>,
    pub rejected: usize,
}

impl ShallowFifo {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            queue: VecDeque::new(),
            sent: Vec::new(),
            rejected: 0,
        }
    }

    /// Everything that reached the wire, once the queue has drained
    pub fn flushed(mut self) -> Vec<u32> {
        self.sent.extend(self.queue.drain(..));
        self.sent
    }
}

impl TxFifo for ShallowFifo {
    fn try_push(&mut self, word: u32) -> bool {
        if self.queue.len() >= self.depth {
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

/// Channel provider with a fixed number of slots
pub struct MockProvider {
    pub clock_khz: Option<u32>,
    pub clock_ok: bool,
    pub free_slots: u8,
    pub claimed_pins: Vec<u8>,
}

impl MockProvider {
    pub fn new(free_slots: u8) -> Self {
        Self {
            clock_khz: None,
            clock_ok: true,
            free_slots,
            claimed_pins: Vec::new(),
        }
    }
}

impl ChannelProvider for MockProvider {
    type Channel = RecordingFifo;
    type Pin = u8;

    fn set_system_clock_khz(&mut self, khz: u32) -> bool {
        if self.clock_ok {
            self.clock_khz = Some(khz);
        }
        self.clock_ok
    }

    fn claim(&mut self, pin: u8) -> Result<RecordingFifo, ChannelError> {
        if self.free_slots == 0 {
            return Err(ChannelError::NoFreeSlot);
        }
        self.free_slots -= 1;
        self.claimed_pins.push(pin);
        Ok(RecordingFifo::default())
    }
}
