//! PIO-based WS2812 channel
//!
//! The state machine shifts 24 bits out of each FIFO word, MSB first, and
//! drives the data pin through side-set so every bit has the same length.

use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;
use ohmmeter_hal::{ChannelError, ChannelProvider, TxFifo};

use crate::pio::{ws2812_clock_divider, BITS_PER_PIXEL};

/// WS2812 channel provider for one PIO state machine
///
/// Owns the PIO common resources and a single state machine, which is
/// handed out by the first successful [`ChannelProvider::claim`].
pub struct PioWs2812<'d, PIO: Instance, const SM: usize, PIN: PioPin> {
    common: Common<'d, PIO>,
    sm: Option<StateMachine<'d, PIO, SM>>,
    _pin: core::marker::PhantomData<PIN>,
}

impl<'d, PIO: Instance, const SM: usize, PIN: PioPin> PioWs2812<'d, PIO, SM, PIN> {
    pub fn new(common: Common<'d, PIO>, sm: StateMachine<'d, PIO, SM>) -> Self {
        Self {
            common,
            sm: Some(sm),
            _pin: core::marker::PhantomData,
        }
    }
}

impl<'d, PIO: Instance, const SM: usize, PIN: PioPin> ChannelProvider
    for PioWs2812<'d, PIO, SM, PIN>
{
    type Channel = PioWs2812Channel<'d, PIO, SM>;
    type Pin = Peri<'d, PIN>;

    /// Check the system clock
    ///
    /// The RP2040 clock tree is configured once by `embassy_rp::init`, so
    /// this only confirms the requested frequency is the one running.
    fn set_system_clock_khz(&mut self, khz: u32) -> bool {
        embassy_rp::clocks::clk_sys_freq() == khz.saturating_mul(1000)
    }

    fn claim(&mut self, pin: Self::Pin) -> Result<Self::Channel, ChannelError> {
        let mut sm = self.sm.take().ok_or(ChannelError::NoFreeSlot)?;

        // T3 - 1, T1 - 1, T2 - 1, T2 - 1 delays (T1=2, T2=5, T3=3)
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "out x, 1       side 0 [2]",
            "jmp !x do_zero side 1 [1]",
            "jmp bitloop    side 1 [4]",
            "do_zero:",
            "nop            side 0 [4]",
            ".wrap"
        );

        let installed = match self.common.try_load_program(&prg.program) {
            Ok(installed) => installed,
            Err(_) => {
                self.sm = Some(sm);
                return Err(ChannelError::ProgramSpace);
            }
        };

        let out_pin = self.common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);

        let (int_part, frac_part) = ws2812_clock_divider(embassy_rp::clocks::clk_sys_freq());
        cfg.clock_divider = U24F8::from_bits(((int_part as u32) << 8) | frac_part as u32);

        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Ok(PioWs2812Channel { sm })
    }
}

/// A claimed WS2812 state machine
pub struct PioWs2812Channel<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> TxFifo for PioWs2812Channel<'d, PIO, SM> {
    fn try_push(&mut self, word: u32) -> bool {
        // `StateMachineTx::push` writes even when the FIFO is full and the
        // word is dropped; only `try_push` checks for room.
        self.sm.tx().try_push(word)
    }
}
