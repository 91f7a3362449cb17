//! Zerocoin accumulator parameters
//!
//! The accumulator modulus is a public-coin RSA-style modulus carried in
//! two textual renderings, hexadecimal (legacy) and decimal. Both must
//! resolve to the same 2048-bit integer; each rendering backs its own
//! process-wide parameter object, built lazily exactly once on first
//! access.

use crate::crypto::BigUnsigned;
use std::sync::OnceLock;

/// Default accumulator security level
pub const ZEROCOIN_DEFAULT_SECURITY_LEVEL: u32 = 100;

/// Decimal rendering of the accumulator modulus
pub const ZEROCOIN_MODULUS_DEC: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
    "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
    "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
    "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
    "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
    "31438167899885040445364023527381951378636564391212010397122822120720357"
);

/// Hexadecimal (legacy) rendering of the accumulator modulus
pub const ZEROCOIN_MODULUS_HEX: &str = concat!(
    "c7970ceedcc3b0754490201a7aa613cd73911081c790f5f1a8726f463550bb5b7ff0db8e1ea1189ec72f93d1650011bd721a",
    "eeacc2acde32a04107f0648c2813a31f5b0b7765ff8b44b4b6ffc93384b646eb09c7cf5e8592d40ea33c80039f35b4f14a04",
    "b51f7bfd781be4d1673164ba8eb991c2c4d730bbbe35f592bdef524af7e8daefd26c66fc02c479af89d64d373f442709439d",
    "e66ceb955f3ea37d5159f6135809f85334b5cb1813addc80cd05609f10ac6a95ad65872c909525bdad32bc729592642920f2",
    "4c61dc5b3c3b7923e56b16a4d9d373d8721f24a3fc0f1b3131f55615172866bccc30f95054c824e733a5eb6817f7bc16399d",
    "48c6361cc7e5"
);

/// Cryptographic parameters derived from the accumulator modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZerocoinParams {
    /// The accumulator modulus
    pub modulus: BigUnsigned,
    /// Significant bits of the modulus
    pub modulus_bit_length: usize,
    /// Accumulator security level
    pub security_level: u32,
}

impl ZerocoinParams {
    fn from_modulus(modulus: BigUnsigned) -> Self {
        let modulus_bit_length = modulus.bit_length();
        Self {
            modulus,
            modulus_bit_length,
            security_level: ZEROCOIN_DEFAULT_SECURITY_LEVEL,
        }
    }
}

static PARAMS_LEGACY: OnceLock<ZerocoinParams> = OnceLock::new();
static PARAMS: OnceLock<ZerocoinParams> = OnceLock::new();

/// Zerocoin parameters for the process
///
/// Two singletons exist, one per modulus rendering; `use_legacy_encoding`
/// selects the hexadecimal one. Each is built on first demand (concurrent
/// first access builds exactly once) and lives for the rest of the
/// process. A modulus constant that fails to parse is build corruption
/// and aborts.
pub fn zerocoin_params(use_legacy_encoding: bool) -> &'static ZerocoinParams {
    if use_legacy_encoding {
        PARAMS_LEGACY.get_or_init(|| {
            let modulus = BigUnsigned::from_hex(ZEROCOIN_MODULUS_HEX)
                .expect("zerocoin modulus hex constant is corrupted");
            ZerocoinParams::from_modulus(modulus)
        })
    } else {
        PARAMS.get_or_init(|| {
            let modulus = BigUnsigned::from_dec(ZEROCOIN_MODULUS_DEC)
                .expect("zerocoin modulus decimal constant is corrupted");
            ZerocoinParams::from_modulus(modulus)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_encodings_agree() {
        let hex = BigUnsigned::from_hex(ZEROCOIN_MODULUS_HEX).unwrap();
        let dec = BigUnsigned::from_dec(ZEROCOIN_MODULUS_DEC).unwrap();
        assert_eq!(hex, dec);
        assert_eq!(hex.bit_length(), 2048);
    }

    #[test]
    fn test_singleton_identity() {
        let a = zerocoin_params(true);
        let b = zerocoin_params(true);
        assert!(std::ptr::eq(a, b));

        let c = zerocoin_params(false);
        let d = zerocoin_params(false);
        assert!(std::ptr::eq(c, d));

        // Independent objects per encoding, equal in value
        assert!(!std::ptr::eq(a, c));
        assert_eq!(a, c);
    }

    #[test]
    fn test_derived_fields() {
        let params = zerocoin_params(false);
        assert_eq!(params.modulus_bit_length, 2048);
        assert_eq!(params.security_level, ZEROCOIN_DEFAULT_SECURITY_LEVEL);
    }
}
