//! # Status Register
//!
//! The processor status byte packs eight flags (NV-BDIZC):
//!
//! | Bit | Flag | Notes |
//! |-----|------|-------|
//! | 7 | N (Negative) | bit 7 of the last result |
//! | 6 | V (Overflow) | signed overflow |
//! | 5 | reserved | always reads 1 |
//! | 4 | B (Break) | only meaningful in bytes pushed by BRK/PHP |
//! | 3 | D (Decimal) | stored, never alters arithmetic |
//! | 2 | I (Interrupt disable) | |
//! | 1 | Z (Zero) | last result was zero |
//! | 0 | C (Carry) | unsigned carry / no-borrow |

use serde::{Deserialize, Serialize};

use crate::ExecutionError;

/// Individual status flags, identified by bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    Break,
    Reserved,
    Overflow,
    Negative,
}

impl Flag {
    /// Bit mask of this flag inside the status byte.
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Carry => 0b0000_0001,
            Flag::Zero => 0b0000_0010,
            Flag::InterruptDisable => 0b0000_0100,
            Flag::Decimal => 0b0000_1000,
            Flag::Break => 0b0001_0000,
            Flag::Reserved => 0b0010_0000,
            Flag::Overflow => 0b0100_0000,
            Flag::Negative => 0b1000_0000,
        }
    }

    /// Single-letter name used in register dumps.
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Reserved => '-',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }

    /// All flags from bit 7 down to bit 0.
    pub const ALL: [Flag; 8] = [
        Flag::Negative,
        Flag::Overflow,
        Flag::Reserved,
        Flag::Break,
        Flag::Decimal,
        Flag::InterruptDisable,
        Flag::Zero,
        Flag::Carry,
    ];
}

/// Packed status register.
///
/// The reserved bit is held at 1 by every constructor and mutator, so `bits()` always
/// has bit 5 set.
///
/// # Examples
///
/// ```
/// use emu6502::{Flag, Status};
///
/// let mut p = Status::new();
/// assert_eq!(p.bits(), 0x20);
///
/// p.set_carry(true);
/// p.update_zero_negative(0x80);
/// assert!(p.carry());
/// assert!(p.negative());
/// assert!(!p.zero());
/// assert_eq!(p.carry_bit(), 1);
/// assert!(p.get(Flag::Reserved));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Status(u8);

/// Bits forced to 1 in a status byte pushed by BRK or PHP.
pub const PUSHED_BITS: u8 = 0b0011_0000;

impl Status {
    /// Power-on value: only the reserved bit set.
    pub const fn new() -> Self {
        Status(Flag::Reserved.mask())
    }

    /// Builds a status register from a raw byte, forcing the reserved bit.
    pub const fn from_bits(bits: u8) -> Self {
        Status(bits | Flag::Reserved.mask())
    }

    /// Builds the live register from a byte pulled off the stack by PLP or RTI.
    ///
    /// The reserved bit is forced back to 1 and the Break bit is dropped: Break only
    /// exists in pushed copies.
    pub const fn from_pulled(bits: u8) -> Self {
        Status((bits | Flag::Reserved.mask()) & !Flag::Break.mask())
    }

    /// Raw byte value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Byte pushed by BRK/PHP: Break and reserved bits forced to 1.
    pub const fn pushed(self) -> u8 {
        self.0 | PUSHED_BITS
    }

    pub fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag`. Requests to clear the reserved bit are ignored.
    pub fn set(&mut self, flag: Flag, on: bool) {
        if on {
            self.0 |= flag.mask();
        } else if flag != Flag::Reserved {
            self.0 &= !flag.mask();
        }
    }

    /// Sets `flag` from a 0/1 bit value.
    ///
    /// Any other value is a caller bug and is reported as
    /// [`ExecutionError::FlagValueOutOfRange`].
    pub fn set_bit(&mut self, flag: Flag, value: u8) -> Result<(), ExecutionError> {
        match value {
            0 | 1 => {
                self.set(flag, value == 1);
                Ok(())
            }
            _ => Err(ExecutionError::FlagValueOutOfRange { flag, value }),
        }
    }

    /// Z = (value == 0), N = bit 7 of value. No other flag is touched.
    #[inline]
    pub fn update_zero_negative(&mut self, value: u8) {
        self.set(Flag::Zero, value == 0);
        self.set(Flag::Negative, value & 0x80 != 0);
    }

    /// Carry as an integer for arithmetic.
    #[inline]
    pub fn carry_bit(self) -> u8 {
        self.0 & Flag::Carry.mask()
    }

    pub fn carry(self) -> bool {
        self.get(Flag::Carry)
    }

    pub fn set_carry(&mut self, on: bool) {
        self.set(Flag::Carry, on);
    }

    pub fn zero(self) -> bool {
        self.get(Flag::Zero)
    }

    pub fn set_zero(&mut self, on: bool) {
        self.set(Flag::Zero, on);
    }

    pub fn interrupt_disable(self) -> bool {
        self.get(Flag::InterruptDisable)
    }

    pub fn set_interrupt_disable(&mut self, on: bool) {
        self.set(Flag::InterruptDisable, on);
    }

    pub fn decimal(self) -> bool {
        self.get(Flag::Decimal)
    }

    pub fn set_decimal(&mut self, on: bool) {
        self.set(Flag::Decimal, on);
    }

    pub fn brk(self) -> bool {
        self.get(Flag::Break)
    }

    pub fn overflow(self) -> bool {
        self.get(Flag::Overflow)
    }

    pub fn set_overflow(&mut self, on: bool) {
        self.set(Flag::Overflow, on);
    }

    pub fn negative(self) -> bool {
        self.get(Flag::Negative)
    }

    pub fn set_negative(&mut self, on: bool) {
        self.set(Flag::Negative, on);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Self {
        Status::from_bits(bits)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.bits()
    }
}

/// Renders set flags as letters and clear flags as `.`, e.g. `N.-..IZC`.
impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for flag in Flag::ALL {
            let c = if self.get(flag) { flag.letter() } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status({:#04X} {})", self.0, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_bit_always_set() {
        assert_eq!(Status::new().bits() & 0x20, 0x20);
        assert_eq!(Status::from_bits(0x00).bits(), 0x20);

        let mut p = Status::new();
        p.set(Flag::Reserved, false);
        assert!(p.get(Flag::Reserved));
    }

    #[test]
    fn test_each_flag_independent() {
        for flag in Flag::ALL {
            if flag == Flag::Reserved {
                continue;
            }
            let mut p = Status::new();
            p.set(flag, true);
            assert_eq!(p.bits(), 0x20 | flag.mask(), "{:?}", flag);
            p.set(flag, false);
            assert_eq!(p.bits(), 0x20, "{:?}", flag);
        }
    }

    #[test]
    fn test_update_zero_negative_leaves_other_flags() {
        let mut p = Status::from_bits(0b0100_1101); // V, D, I, C
        p.update_zero_negative(0x00);
        assert!(p.zero());
        assert!(!p.negative());
        assert!(p.overflow() && p.decimal() && p.interrupt_disable() && p.carry());

        p.update_zero_negative(0xFF);
        assert!(!p.zero());
        assert!(p.negative());
    }

    #[test]
    fn test_set_bit_accepts_zero_and_one() {
        let mut p = Status::new();
        p.set_bit(Flag::Carry, 1).unwrap();
        assert!(p.carry());
        p.set_bit(Flag::Carry, 0).unwrap();
        assert!(!p.carry());
    }

    #[test]
    fn test_set_bit_rejects_other_values() {
        let mut p = Status::new();
        let err = p.set_bit(Flag::Overflow, 2).unwrap_err();
        assert_eq!(
            err,
            ExecutionError::FlagValueOutOfRange {
                flag: Flag::Overflow,
                value: 2
            }
        );
        assert!(!p.overflow());
    }

    #[test]
    fn test_pushed_forces_break_and_reserved() {
        assert_eq!(Status::from_bits(0x00).pushed(), 0x30);
        assert_eq!(Status::from_bits(0xC3).pushed(), 0xF3);
    }

    #[test]
    fn test_from_pulled_drops_break() {
        let p = Status::from_pulled(0xFF);
        assert_eq!(p.bits(), 0xEF);
        let p = Status::from_pulled(0x00);
        assert_eq!(p.bits(), 0x20);
    }

    #[test]
    fn test_named_setters() {
        let mut p = Status::new();
        p.set_negative(true);
        p.set_decimal(true);
        assert_eq!(p.bits(), 0xA8);
        assert!(p.negative() && p.decimal());

        p.set_negative(false);
        p.set_decimal(false);
        assert_eq!(p.bits(), 0x20);
    }

    #[test]
    fn test_display_letters() {
        let p = Status::from_bits(0b1000_0011);
        assert_eq!(p.to_string(), "N.-...ZC");
    }
}
