use heapless::Vec;
use meridian_nmea::SliceLine;

use super::*;
use crate::config::DebounceConfig;

const RMC_FIX: &[u8] =
    b"$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70\r\n";
const RMC_BAD_CHECKSUM: &[u8] =
    b"$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*00\r\n";
const RMC_NO_TIME: &[u8] = b"$GPRMC,,V,,,,,,,,,,N*53\r\n";
/// Cold-start sentence without its line end, so copies decode back to back
const RMC_NO_TIME_BARE: &[u8] = b"$GPRMC,,V,,,,,,,,,,N*53";
const VTG: &[u8] = b"$GPVTG,360.0,T,348.7,M,000.0,N,000.0,K*43\r\n";

const BLANK: u8 = 0x0F;
const DP: u8 = 0x8F;

/// Ambient reading that is neither dark nor a button press
const ROOM_LIGHT: u8 = 128;

#[derive(Default)]
struct MockDisplay {
    registers: [u8; 16],
    writes: usize,
    intensity_writes: Vec<u8, 16>,
    init: Option<(u8, u8)>,
    fail: bool,
}

impl MockDisplay {
    fn digits(&self) -> [u8; 6] {
        core::array::from_fn(|i| self.registers[i + 1])
    }
}

impl DisplayDriver for MockDisplay {
    fn write_register(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Bus);
        }
        self.registers[address as usize] = data;
        self.writes += 1;
        Ok(())
    }

    fn init(&mut self, digits: u8, intensity: u8) -> Result<(), DisplayError> {
        self.init = Some((digits, intensity));
        Ok(())
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), DisplayError> {
        self.intensity_writes.push(level).map_err(|_| DisplayError::Bus)
    }
}

#[derive(Default)]
struct MockStore {
    cells: [Option<u8>; 4],
    writes: usize,
    fail_writes: bool,
}

impl PersistentStore for MockStore {
    fn read(&mut self, address: u8) -> Result<u8, StoreError> {
        self.cells[address as usize].ok_or(StoreError::NotFound)
    }

    fn write(&mut self, address: u8, value: u8) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Flash);
        }
        self.cells[address as usize] = Some(value);
        self.writes += 1;
        Ok(())
    }
}

struct MockAnalog<'a> {
    samples: &'a [u8],
    next: usize,
}

impl AnalogInput for MockAnalog<'_> {
    fn read(&mut self) -> u8 {
        let sample = self.samples.get(self.next).copied().unwrap_or(ROOM_LIGHT);
        self.next += 1;
        sample
    }
}

/// Replays a poll script, then reports a timepulse forever
struct MockEvents<'a> {
    script: &'a [Option<LineEvent>],
    next: usize,
    clears: usize,
}

impl EventFlags for MockEvents<'_> {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn poll(&mut self) -> Option<LineEvent> {
        let event = self
            .script
            .get(self.next)
            .copied()
            .unwrap_or(Some(LineEvent::Timepulse));
        self.next += 1;
        event
    }
}

#[derive(Default)]
struct MockDelay {
    total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

type TestClock<'a> = ClockController<
    SliceLine<'a>,
    MockDisplay,
    MockStore,
    MockAnalog<'a>,
    MockEvents<'a>,
    MockDelay,
    6,
>;

fn clock_with<'a>(
    serial: &'a [u8],
    analog: &'a [u8],
    events: &'a [Option<LineEvent>],
    stored_offset: Option<u8>,
    config: ClockConfig,
) -> TestClock<'a> {
    let mut store = MockStore::default();
    store.cells[TIMEZONE_OFFSET_ADDRESS as usize] = stored_offset;

    let io = ClockIo {
        serial: SliceLine::new(serial),
        display: MockDisplay::default(),
        store,
        analog: MockAnalog { samples: analog, next: 0 },
        events: MockEvents {
            script: events,
            next: 0,
            clears: 0,
        },
        delay: MockDelay::default(),
    };
    ClockController::new(io, config)
}

fn clock<'a>(
    serial: &'a [u8],
    analog: &'a [u8],
    events: &'a [Option<LineEvent>],
    stored_offset: Option<u8>,
) -> TestClock<'a> {
    clock_with(serial, analog, events, stored_offset, ClockConfig::default())
}

#[test]
fn test_start_loads_offset_and_shows_no_signal() {
    let mut c = clock(b"", &[], &[], Some(13));
    c.start().unwrap();

    assert_eq!(c.offset().hours(), 13);
    assert_eq!(c.io().display.init, Some((6, 12)));
    assert_eq!(c.io().display.digits(), [DP, BLANK, BLANK, BLANK, BLANK, BLANK]);
    assert_eq!(c.state(), State::Idle);
}

#[test]
fn test_unusable_stored_offset_loads_utc() {
    assert_eq!(clock(b"", &[], &[], Some(0x40)).offset(), TimezoneOffset::UTC);
    assert_eq!(clock(b"", &[], &[], None).offset(), TimezoneOffset::UTC);
}

#[test]
fn test_fix_committed_on_timepulse() {
    let mut c = clock(RMC_FIX, &[], &[], Some(13));

    let outcome = c.run_cycle().unwrap();
    assert_eq!(outcome, CycleOutcome::Committed(DecodeStatus::Success));

    // 22:05:16 UT, one second of latency, thirteen hours east
    assert_eq!(c.last_fix(), Some(TimeOfDay::new(11, 5, 17)));
    assert_eq!(c.io().display.digits(), [1, 1, 0, 5, 1, 7]);
    assert_eq!(c.state(), State::Idle);

    // Line end drained before the flags were armed
    assert!(c.io().serial.remaining().is_empty());
    assert_eq!(c.io().events.clears, 1);

    // A valid fix leaves the analog input alone
    assert_eq!(c.io().analog.next, 0);
}

#[test]
fn test_waits_for_edge() {
    let script = [None, None, None, Some(LineEvent::Timepulse)];
    let mut c = clock(RMC_FIX, &[], &script, None);

    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::Success)
    );
    assert_eq!(c.io().events.next, 4);
    assert_eq!(c.io().display.digits(), [2, 2, 0, 5, 1, 7]);
}

#[test]
fn test_serial_activity_defers_frame() {
    let script = [Some(LineEvent::SerialActivity)];
    let mut c = clock(RMC_FIX, &[], &script, None);

    assert_eq!(c.run_cycle().unwrap(), CycleOutcome::Deferred);
    assert_eq!(c.io().display.writes, 0);
    assert_eq!(c.state(), State::Idle);
}

#[test]
fn test_unaligned_commits_immediately() {
    let config = ClockConfig {
        align_to_timepulse: false,
        latency_compensation_s: 0,
        ..ClockConfig::default()
    };
    let mut c = clock_with(RMC_FIX, &[], &[], None, config);

    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::Success)
    );
    assert_eq!(c.io().display.digits(), [2, 2, 0, 5, 1, 6]);
    assert_eq!(c.io().events.clears, 0);
}

#[test]
fn test_no_signal_walks_decimal_point() {
    let mut serial = [0u8; 2 * RMC_NO_TIME.len()];
    serial[..RMC_NO_TIME.len()].copy_from_slice(RMC_NO_TIME);
    serial[RMC_NO_TIME.len()..].copy_from_slice(RMC_NO_TIME);

    let mut c = clock(&serial, &[], &[], None);
    c.start().unwrap();

    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::NoSignal)
    );
    assert_eq!(c.io().display.digits(), [BLANK, DP, BLANK, BLANK, BLANK, BLANK]);

    // Only a valid fix drains the line end; the CR/LF left behind is no RMC
    assert_eq!(c.run_cycle().unwrap(), CycleOutcome::Skipped);
    assert_eq!(c.io().display.digits(), [BLANK, DP, BLANK, BLANK, BLANK, BLANK]);

    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::NoSignal)
    );
    assert_eq!(c.io().display.digits(), [BLANK, BLANK, DP, BLANK, BLANK, BLANK]);

    // No timepulse wait for anything but a valid fix
    assert_eq!(c.io().events.clears, 0);
}

#[test]
fn test_decimal_point_wraps_after_last_digit() {
    let mut serial = [0u8; 6 * RMC_NO_TIME_BARE.len()];
    for chunk in serial.chunks_mut(RMC_NO_TIME_BARE.len()) {
        chunk.copy_from_slice(RMC_NO_TIME_BARE);
    }

    let mut c = clock(&serial, &[], &[], None);
    c.start().unwrap();
    for _ in 0..5 {
        assert_eq!(
            c.run_cycle().unwrap(),
            CycleOutcome::Committed(DecodeStatus::NoSignal)
        );
    }
    assert_eq!(c.io().display.digits(), [BLANK, BLANK, BLANK, BLANK, BLANK, DP]);

    c.run_cycle().unwrap();
    assert_eq!(c.io().display.digits(), [DP, BLANK, BLANK, BLANK, BLANK, BLANK]);
    assert_eq!(TestClock::DIGITS, 6);
}

#[test]
fn test_faults_show_error_codes() {
    let mut c = clock(RMC_BAD_CHECKSUM, &[], &[], None);
    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::InvalidChecksum)
    );
    assert_eq!(c.io().display.digits(), [0x0B, 1, BLANK, BLANK, BLANK, BLANK]);

    // Silent line: the byte budget runs out
    let mut c = clock(b"", &[], &[], None);
    assert_eq!(
        c.run_cycle().unwrap(),
        CycleOutcome::Committed(DecodeStatus::BadFormat)
    );
    assert_eq!(c.io().display.digits(), [0x0B, 2, BLANK, BLANK, BLANK, BLANK]);
}

#[test]
fn test_other_sentences_skipped() {
    let mut c = clock(VTG, &[], &[], None);

    assert_eq!(c.run_cycle().unwrap(), CycleOutcome::Skipped);
    assert_eq!(c.io().display.writes, 0);
    assert_eq!(c.state(), State::Decoded(DecodeStatus::NoMatch));
    // Idle time still samples the analog input
    assert_eq!(c.io().analog.next, 1);
}

#[test]
fn test_intensity_written_only_on_change() {
    let mut serial = [0u8; 2 * RMC_NO_TIME_BARE.len()];
    serial[..RMC_NO_TIME_BARE.len()].copy_from_slice(RMC_NO_TIME_BARE);
    serial[RMC_NO_TIME_BARE.len()..].copy_from_slice(RMC_NO_TIME_BARE);

    let mut c = clock(&serial, &[250, 250], &[], None);
    for _ in 0..2 {
        assert_eq!(
            c.run_cycle().unwrap(),
            CycleOutcome::Committed(DecodeStatus::NoSignal)
        );
    }
    assert_eq!(c.io().analog.next, 2);

    assert_eq!(c.intensity(), 15);
    assert_eq!(c.io().display.intensity_writes.as_slice(), &[15]);
}

#[test]
fn test_held_button_advances_and_persists() {
    // Two full windows, then release
    let mut analog = [0u8; 41];
    analog[40] = ROOM_LIGHT;

    let mut c = clock(VTG, &analog, &[], Some(12));
    assert_eq!(c.run_cycle().unwrap(), CycleOutcome::Skipped);

    // 12 -> 13 -> -12
    assert_eq!(c.offset().hours(), -12);
    assert_eq!(c.io().store.cells[0], Some(0xF4));
    assert_eq!(c.io().store.writes, 1);
    assert_eq!(c.io().display.digits(), [0x0A, 1, 2, BLANK, BLANK, BLANK]);

    let interval_ms = DebounceConfig::default().sample_interval_ms as u64;
    assert_eq!(c.io().delay.total_ns, 40 * interval_ms * 1_000_000);
}

#[test]
fn test_short_press_ignored() {
    let mut c = clock(VTG, &[0, 0, 0, ROOM_LIGHT], &[], Some(3));
    c.run_cycle().unwrap();

    assert_eq!(c.offset().hours(), 3);
    assert_eq!(c.io().store.writes, 0);
    assert_eq!(c.io().display.writes, 0);
}

#[test]
fn test_display_failure_abandons_cycle() {
    let mut c = clock(RMC_NO_TIME, &[], &[], None);
    let mut io = c.into_io();
    io.display.fail = true;
    c = ClockController::new(io, ClockConfig::default());

    assert_eq!(c.run_cycle(), Err(ClockError::Display(DisplayError::Bus)));
    assert_eq!(c.state(), State::Idle);
}

#[test]
fn test_store_failure_reported() {
    let mut c = clock(VTG, &[0; 21], &[], None);
    let mut io = c.into_io();
    io.store.fail_writes = true;
    c = ClockController::new(io, ClockConfig::default());

    assert_eq!(c.run_cycle(), Err(ClockError::Store(StoreError::Flash)));
    // The new offset stays active for this session
    assert_eq!(c.offset().hours(), 1);
    assert_eq!(c.state(), State::Idle);
}
