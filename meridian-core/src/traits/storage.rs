//! Persistent byte storage trait

/// Errors from persistent storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Flash operation failed
    Flash,
    /// Nothing has been stored at this address
    NotFound,
    /// Data corrupted or invalid
    Corrupted,
}

/// Byte-addressed non-volatile storage
///
/// Writes are best-effort: the caller does not wait for any completion
/// acknowledgment beyond the returned result.
pub trait PersistentStore {
    /// Read the byte stored at `address`
    fn read(&mut self, address: u8) -> Result<u8, StoreError>;

    /// Store `value` at `address`
    fn write(&mut self, address: u8, value: u8) -> Result<(), StoreError>;
}
