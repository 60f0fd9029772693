//! Clock loop
//!
//! The controller owns the CPU: sentence reception and the timepulse wait
//! are both busy loops, so nothing else is scheduled alongside it.

use defmt::*;
use embassy_time::Delay;
use meridian_core::controller::{ClockController, CycleOutcome};
use meridian_core::nmea::DecodeStatus;
use meridian_drivers::display::Max7219;
use meridian_drivers::sensor::LightSensor;
use meridian_drivers::serial::SoftUart;
use meridian_drivers::spi::BitBangSpi;
use meridian_hal_rp2040::{EdgeFlags, FlashByteStore, RpAdcChannel, RpInput, RpOutput};

use crate::config::DIGITS;

/// The clock as wired on the reference board
pub type Clock = ClockController<
    SoftUart<RpInput<'static>, Delay>,
    Max7219<BitBangSpi<RpOutput<'static>, RpOutput<'static>, Delay>, RpOutput<'static>>,
    FlashByteStore<'static>,
    LightSensor<RpAdcChannel<'static>>,
    EdgeFlags<'static>,
    Delay,
    DIGITS,
>;

/// Start the display and run cycles forever
pub fn run(mut clock: Clock) -> ! {
    if let Err(e) = clock.start() {
        warn!("Display init failed: {}", e);
    }
    info!("Clock running, timezone offset {} h", clock.offset().hours());

    let mut offset = clock.offset();
    loop {
        match clock.run_cycle() {
            Ok(CycleOutcome::Committed(DecodeStatus::Success)) => {
                if let Some(t) = clock.last_fix() {
                    info!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second);
                }
            }
            Ok(CycleOutcome::Committed(status)) if status.is_fault() => {
                warn!("Decode fault: {}", status);
            }
            Ok(CycleOutcome::Committed(status)) => debug!("Committed {}", status),
            Ok(CycleOutcome::Deferred) => debug!("Serial activity before timepulse, frame dropped"),
            Ok(CycleOutcome::Skipped) => {}
            Err(e) => warn!("Cycle abandoned: {}", e),
        }

        if clock.offset() != offset {
            offset = clock.offset();
            info!("Timezone offset now {} h (intensity {})", offset.hours(), clock.intensity());
        }
    }
}
