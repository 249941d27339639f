//! Ohmmeter firmware
//!
//! Measures an unknown resistor against a known one through the ADC, shows
//! the value on an SSD1306 OLED and its four-band colour code on a 5x5
//! WS2812 matrix.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::ClockConfig;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::{PIN_7, PIO0};
use embassy_rp::pio::Pio;
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use ohmmeter_core::BoardConfig;
use ohmmeter_drivers::matrix::SYS_CLOCK_KHZ;
use ohmmeter_drivers::{LedMatrix, Ssd1306, Ssd1306Config};
use ohmmeter_hal::I2cConfig;
use ohmmeter_hal_rp2040::PioWs2812;

mod screen;
mod tasks;

// Heap allocator for the display framebuffer
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 4KB (framebuffer is 1025 bytes)
const HEAP_SIZE: usize = 4 * 1024;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ohmmeter firmware starting...");

    // Initialize heap allocator
    init_heap();

    let config = BoardConfig::default();
    if let Err(e) = config.validate() {
        error!("Invalid board configuration: {:?}", e);
        halt().await
    }

    // The WS2812 bit timing divides evenly from 128 MHz
    let p = embassy_rp::init(rp_config());
    info!(
        "Peripherals initialized, clk_sys={} Hz",
        embassy_rp::clocks::clk_sys_freq()
    );

    // OLED on I2C1
    // Pin assignments are board-specific (SDA=GPIO14, SCL=GPIO15)
    let i2c_config = I2cConfig::with_frequency(config.display.i2c_frequency);
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PIN_15,
        p.PIN_14,
        ohmmeter_hal_rp2040::i2c::embassy_config(&i2c_config),
    );

    let display_config = Ssd1306Config {
        width: config.display.width,
        height: config.display.height,
        address: config.display.address,
        external_vcc: config.display.external_vcc,
    };
    // Only a failed allocation loses the display; a panel that does not
    // answer is retried by the meter task
    let (display, display_ready) = match Ssd1306::new(i2c, display_config) {
        Ok(mut display) => match display.power_on() {
            Ok(()) => {
                display.fill(false);
                if let Err(e) = display.flush() {
                    warn!("Display clear failed: {:?}", e);
                }
                info!("Display initialized");
                (Some(display), true)
            }
            Err(e) => {
                warn!("Display not answering: {:?}", e);
                (Some(display), false)
            }
        },
        Err(e) => {
            error!("Display unavailable: {:?}", e);
            (None, false)
        }
    };

    // LED matrix on PIO0
    // Pin assignment is board-specific (matrix data: GPIO7)
    let Pio { common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let mut ws2812: PioWs2812<'static, PIO0, 0, PIN_7> = PioWs2812::new(common, sm0);
    let matrix = match LedMatrix::init(&mut ws2812, p.PIN_7) {
        Ok(mut matrix) => {
            matrix.clear();
            info!("LED matrix initialized");
            Some(matrix)
        }
        Err(e) => {
            error!("LED matrix init failed: {:?}", e);
            None
        }
    };

    // Divider input on ADC2
    // Pin assignment is board-specific (GPIO28)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let input = Channel::new_pin(p.PIN_28, Pull::None);
    info!("ADC initialized");

    // Button A is wired but has no function yet
    let _button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::bootsel_task(button_b)).unwrap();
    spawner
        .spawn(tasks::meter_task(
            adc,
            input,
            display,
            display_ready,
            matrix,
            config.meter,
            config.matrix,
            config.refresh_ms,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // The PIO common resources stay owned here for the program's lifetime
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Peripheral config with the system clock at 128 MHz
fn rp_config() -> embassy_rp::config::Config {
    match ClockConfig::system_freq(SYS_CLOCK_KHZ * 1000) {
        Ok(clocks) => embassy_rp::config::Config::new(clocks),
        Err(e) => {
            warn!("Cannot run clk_sys at 128 MHz: {:?}", Debug2Format(&e));
            embassy_rp::config::Config::default()
        }
    }
}

/// Park the main task after a fatal configuration error
async fn halt() -> ! {
    loop {
        embassy_time::Timer::after_secs(60).await;
    }
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
