//! Arbitrary-precision unsigned integer parsing
//!
//! Parse-only big integer over little-endian u32 limbs, sized for the
//! 2048-bit zerocoin accumulator modulus. The registry never does modular
//! arithmetic; it only needs to parse the modulus from its hexadecimal and
//! decimal renderings and compare the results.

use thiserror::Error;

/// Big-number parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BigNumError {
    #[error("empty digit string")]
    Empty,
    #[error("invalid digit '{0}'")]
    InvalidDigit(char),
}

/// Unsigned big integer, little-endian u32 limbs with no trailing zeros
#[derive(Clone, PartialEq, Eq)]
pub struct BigUnsigned {
    limbs: Vec<u32>,
}

impl BigUnsigned {
    /// The value zero
    pub fn zero() -> Self {
        BigUnsigned { limbs: Vec::new() }
    }

    /// Parse from a hexadecimal digit string (no 0x prefix)
    pub fn from_hex(digits: &str) -> Result<Self, BigNumError> {
        Self::parse_radix(digits, 16)
    }

    /// Parse from a decimal digit string
    pub fn from_dec(digits: &str) -> Result<Self, BigNumError> {
        Self::parse_radix(digits, 10)
    }

    fn parse_radix(digits: &str, radix: u32) -> Result<Self, BigNumError> {
        if digits.is_empty() {
            return Err(BigNumError::Empty);
        }

        let mut value = BigUnsigned::zero();
        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or(BigNumError::InvalidDigit(c))?;
            value.mul_small_add(radix, d);
        }
        Ok(value)
    }

    /// value = value * mul + add, carrying across limbs
    fn mul_small_add(&mut self, mul: u32, add: u32) {
        let mut carry = add as u64;
        for limb in self.limbs.iter_mut() {
            let product = (*limb as u64) * (mul as u64) + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        while carry != 0 {
            self.limbs.push(carry as u32);
            carry >>= 32;
        }
    }

    /// True if the value is zero
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(top) => (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
        }
    }

    /// Render as lowercase hexadecimal with no leading zeros
    pub fn to_hex(&self) -> String {
        let Some((top, rest)) = self.limbs.split_last() else {
            return "0".to_string();
        };
        let mut out = format!("{:x}", top);
        for limb in rest.iter().rev() {
            out.push_str(&format!("{:08x}", limb));
        }
        out
    }
}

impl std::fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigUnsigned({} bits)", self.bit_length())
    }
}

impl std::fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
