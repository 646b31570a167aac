//! # Memory
//!
//! The interpreter addresses a single flat 64KB space. There is no bank switching and
//! no memory-mapped I/O: every address is plain RAM owned by the CPU.
//!
//! ## Layout conventions
//!
//! - `0x0000-0x00FF`: zero page (short 1-byte operand encodings)
//! - `0x0100-0x01FF`: hardware stack
//! - `0xFFFC/0xFFFD`: reset vector (little-endian)
//! - `0xFFFE/0xFFFF`: BRK/IRQ vector (little-endian)
//!
//! Addresses are `u16`, so every read and write is in range by construction. Word reads
//! wrap from 0xFFFF back to 0x0000.

use crate::ExecutionError;

/// Total number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the reset vector low byte.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the BRK/IRQ vector low byte.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Flat 64KB memory image.
///
/// # Examples
///
/// ```
/// use emu6502::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// // Extremes are ordinary addresses
/// mem.write(0xFFFF, 0x01);
/// assert_eq!(mem.read(0xFFFF), 0x01);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a zero-filled memory image.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory holding `image` starting at `load_address`.
    ///
    /// Fails with [`ExecutionError::ImageTooLarge`] when the image would run past 0xFFFF.
    pub fn with_image(image: &[u8], load_address: u16) -> Result<Self, ExecutionError> {
        let mut memory = Self::new();
        memory.load(image, load_address)?;
        Ok(memory)
    }

    /// Copies `image` into memory starting at `load_address`.
    pub fn load(&mut self, image: &[u8], load_address: u16) -> Result<(), ExecutionError> {
        let start = load_address as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            return Err(ExecutionError::ImageTooLarge {
                len: image.len(),
                load_address,
            });
        }
        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Reads the byte at `addr`.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes `value` to `addr`.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping at 0xFFFF).
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a little-endian word whose high byte comes from the next zero-page slot.
    ///
    /// Pointer fetches for `(zp,X)` and `(zp),Y` never leave page zero: a pointer at
    /// 0xFF takes its high byte from 0x00.
    pub fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.read(zp as u16);
        let hi = self.read(zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    /// Writes `value` as a little-endian word at `addr` and `addr + 1`.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Returns the whole image as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("reset_vector", &format_args!("{:#06X}", self.read_word(RESET_VECTOR)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write() {
        let mut mem = Memory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_memory_size_is_fixed() {
        let mem = Memory::new();
        assert_eq!(mem.as_slice().len(), 65536);
    }

    #[test]
    fn test_load_image_at_offset() {
        let mem = Memory::with_image(&[0xA9, 0x05, 0xAA], 0x0400).unwrap();
        assert_eq!(mem.read(0x03FF), 0x00);
        assert_eq!(mem.read(0x0400), 0xA9);
        assert_eq!(mem.read(0x0401), 0x05);
        assert_eq!(mem.read(0x0402), 0xAA);
    }

    #[test]
    fn test_load_full_64k_image() {
        let image = vec![0xEA; MEMORY_SIZE];
        let mem = Memory::with_image(&image, 0).unwrap();
        assert_eq!(mem.read(0xFFFF), 0xEA);
    }

    #[test]
    fn test_load_rejects_overflowing_image() {
        let err = Memory::with_image(&[1, 2, 3], 0xFFFE).unwrap_err();
        assert_eq!(
            err,
            ExecutionError::ImageTooLarge {
                len: 3,
                load_address: 0xFFFE
            }
        );
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = Memory::new();
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn test_zero_page_word_stays_in_page_zero() {
        let mut mem = Memory::new();
        mem.write(0x00FF, 0x00);
        mem.write(0x0000, 0x80);
        mem.write(0x0100, 0x99);
        assert_eq!(mem.read_zero_page_word(0xFF), 0x8000);
    }

    #[test]
    fn test_write_word_little_endian() {
        let mut mem = Memory::new();
        mem.write_word(RESET_VECTOR, 0x0400);
        assert_eq!(mem.read(0xFFFC), 0x00);
        assert_eq!(mem.read(0xFFFD), 0x04);
    }
}
