//! Meridian - GPS-Disciplined Digital Clock Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads NMEA RMC sentences
//! from a GPS module, shifts the time to the local timezone and shows it
//! on a MAX7219 LED display, committed on the GPS timepulse.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use meridian_core::config::ClockConfig;
use meridian_core::controller::{ClockController, ClockIo};
use meridian_drivers::display::Max7219;
use meridian_drivers::sensor::LightSensor;
use meridian_drivers::serial::SoftUart;
use meridian_drivers::spi::BitBangSpi;
use meridian_hal_rp2040::{EdgeFlags, FlashByteStore, RpAdcChannel, RpInput, RpOutput};

mod clock;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Meridian clock starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut clock_config = config::clock_config();
    if let Err(e) = clock_config.validate() {
        warn!("Invalid clock configuration ({}), using defaults", e);
        clock_config = ClockConfig::default();
    }

    // GPS serial in (idle high) and timepulse
    let serial = SoftUart::new(
        RpInput::new(Input::new(p.PIN_1, Pull::Up)),
        Delay,
        config::uart_config(),
    );
    let events = EdgeFlags::new(
        Input::new(p.PIN_2, Pull::Down),
        config::TIMEPULSE_GPIO,
        config::GPS_RX_GPIO,
    );

    // MAX7219 on bit-banged SPI; LOAD idles high
    let spi = BitBangSpi::new(
        RpOutput::new(Output::new(p.PIN_10, Level::Low)),
        RpOutput::new(Output::new(p.PIN_11, Level::Low)),
        Delay,
        config::SPI_HALF_PERIOD_NS,
    );
    let display = Max7219::new(spi, RpOutput::new(Output::new(p.PIN_13, Level::High)));

    // Photo divider and adjust button share ADC0
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let light = LightSensor::new(RpAdcChannel::new(
        adc,
        adc::Channel::new_pin(p.PIN_26, Pull::None),
    ));

    let store = FlashByteStore::new(p.FLASH, p.DMA_CH0);

    let io = ClockIo {
        serial,
        display,
        store,
        analog: light,
        events,
        delay: Delay,
    };
    let controller: clock::Clock = ClockController::new(io, clock_config);
    info!("Hardware configured");

    clock::run(controller)
}
