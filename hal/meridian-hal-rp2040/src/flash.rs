//! Flash-backed byte store for RP2040
//!
//! The RP2040 has no EEPROM. Bytes are kept as one-byte items in a
//! sequential-storage map at the end of flash, which levels wear across
//! the partition. Each [`StorageKey`] is a byte address.

use core::ops::Range;

use embassy_futures::block_on;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use meridian_core::traits::{PersistentStore, StoreError};
use meridian_hal::StorageKey;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

/// Flash size of the reference board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Two erase sectors at the top of flash
pub const STORE_PARTITION_SIZE: usize = 2 * ERASE_SIZE;

/// Flash range used by the store
pub const STORE_RANGE: Range<u32> = ((FLASH_SIZE - STORE_PARTITION_SIZE) as u32)..(FLASH_SIZE as u32);

/// Scratch space for one map item (header, key and value)
const ITEM_BUFFER_SIZE: usize = 32;

/// Byte-addressed [`PersistentStore`] in on-board flash
///
/// Flash operations run to completion before returning.
pub struct FlashByteStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> FlashByteStore<'d> {
    /// Create a store on the flash peripheral
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl PersistentStore for FlashByteStore<'_> {
    fn read(&mut self, address: u8) -> Result<u8, StoreError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];
        let key = StorageKey::from(address);

        let item = block_on(map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut buffer,
            &key,
        ))
        .map_err(|_| StoreError::Flash)?;

        match item {
            Some(&[value]) => Ok(value),
            Some(_) => Err(StoreError::Corrupted),
            None => Err(StoreError::NotFound),
        }
    }

    fn write(&mut self, address: u8, value: u8) -> Result<(), StoreError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];
        let key = StorageKey::from(address);
        let data: &[u8] = &[value];

        block_on(map::store_item(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut buffer,
            &key,
            &data,
        ))
        .map_err(|_| StoreError::Flash)
    }
}
