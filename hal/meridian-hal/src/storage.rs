//! Persistent storage keys
//!
//! The clock persists single bytes at fixed addresses. Flash-backed
//! implementations store each address as one key in a wear-levelled map;
//! [`StorageKey`] is that key.

/// Storage key wrapping a byte address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageKey(pub u8);

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for StorageKey {
    fn from(address: u8) -> Self {
        StorageKey(address)
    }
}

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        match buffer.first() {
            Some(&address) => Ok((StorageKey(address), 1)),
            None => Err(sequential_storage::map::SerializationError::BufferTooSmall),
        }
    }
}
