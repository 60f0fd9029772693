//! Byte sources for the decoder

/// A serial line that yields received bytes one at a time
///
/// `read_byte` blocks until a byte has been received. There is no timeout:
/// the decoder's byte budget is what guarantees forward progress.
pub trait SerialLine {
    /// Receive exactly one byte
    fn read_byte(&mut self) -> u8;
}

impl<T: SerialLine + ?Sized> SerialLine for &mut T {
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }
}

/// Replays a fixed byte slice, then yields an idle byte forever
///
/// Useful for simulations and tests: a receiver attached to a dead line
/// keeps producing the same byte rather than blocking.
#[derive(Debug, Clone)]
pub struct SliceLine<'a> {
    data: &'a [u8],
    pos: usize,
    idle: u8,
    consumed: usize,
}

impl<'a> SliceLine<'a> {
    /// Replay `data`, then NUL bytes
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_idle(data, 0x00)
    }

    /// Replay `data`, then `idle` bytes
    pub fn with_idle(data: &'a [u8], idle: u8) -> Self {
        Self {
            data,
            pos: 0,
            idle,
            consumed: 0,
        }
    }

    /// Total number of bytes handed out, including idle bytes
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes of the slice not yet read
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl SerialLine for SliceLine<'_> {
    fn read_byte(&mut self) -> u8 {
        self.consumed += 1;
        match self.data.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                byte
            }
            None => self.idle,
        }
    }
}
