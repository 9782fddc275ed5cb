//! IBM System/360 hexadecimal floating point conversion.
//!
//! An IBM float32 word is laid out as `S EEEEEEE FFFFFFFF FFFFFFFF FFFFFFFF`:
//! one sign bit, a 7-bit base-16 exponent biased by 64, and a 24-bit
//! fraction with the radix point before its first hex digit. The value is
//! `(-1)^S * 0.F * 16^(E - 64)`.

use crate::{Result, SegyError};

const LOG2: f64 = 0.301_029_995_663_981_2;

/// Upper bound on normalization steps: one per possible exponent value.
const MAX_NORMALIZE_STEPS: u32 = 128;

/// Convert an IBM float32 word (host order) to an IEEE754 single.
///
/// Zero fractions give signed zero, values below the IEEE range become
/// subnormals or signed zero, and values above it become signed infinity.
pub fn ibm_to_ieee(word: u32) -> f32 {
    let sign = word >> 31;
    let mut fraction = word << 1;
    let mut exponent = (fraction >> 25) as i32;
    fraction <<= 7;

    if fraction == 0 {
        return f32::from_bits(sign << 31);
    }

    // base 16 bias 64 with the radix point before the first digit, to
    // base 2 bias 127 with the radix point after the first digit
    exponent = (exponent << 2) - 130;

    // at most three steps for a normalized IBM fraction
    while fraction < 0x8000_0000 {
        exponent -= 1;
        fraction <<= 1;
    }

    if exponent <= 0 {
        fraction = if exponent < -24 {
            0
        } else {
            fraction >> -exponent
        };
        exponent = 0;
    } else if exponent >= 255 {
        fraction = 0;
        exponent = 255;
    } else {
        // drop the implicit leading bit
        fraction <<= 1;
    }

    f32::from_bits((fraction >> 9) | ((exponent as u32) << 23) | (sign << 31))
}

/// Convert an IEEE754 single to an IBM float32 word (host order).
///
/// Zero (of either sign) encodes as the all-zero word. NaN and infinity
/// have no IBM representation.
pub fn ieee_to_ibm(value: f32) -> Result<u32> {
    if value == 0.0 {
        return Ok(0);
    }
    if !value.is_finite() {
        return Err(SegyError::IbmOutOfRange { value });
    }

    let sign: u32 = if value < 0.0 { 0x80 } else { 0 };
    let magnitude = value.abs();

    // truncating log16 estimate of the base-16 bucket
    let mut exponent = ((magnitude as f64).log10() / LOG2 * 0.25 + 65.0) as i32;
    let mut fraction = (magnitude as f64 / 16f64.powi(exponent - 64)) as f32;

    let mut steps = 0;
    while fraction < 0.0625 {
        if steps == MAX_NORMALIZE_STEPS {
            return Err(SegyError::IbmOutOfRange { value });
        }
        fraction *= 16.0;
        exponent -= 1;
        steps += 1;
    }

    if fraction == 1.0 {
        fraction = 0.0625;
        exponent += 1;
    }

    if !(0..=127).contains(&exponent) || fraction > 1.0 {
        return Err(SegyError::IbmOutOfRange { value });
    }

    let mantissa = (fraction as f64 * 16_777_216.0) as u32 & 0x00FF_FFFF;
    Ok(((sign | exponent as u32) << 24) | mantissa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words() {
        assert_eq!(ibm_to_ieee(0x4264_0000), 100.0);
        assert_eq!(ibm_to_ieee(0xC264_0000), -100.0);
        assert_eq!(ibm_to_ieee(0x4110_0000), 1.0);
        assert_eq!(ibm_to_ieee(0x4080_0000), 0.5);
        assert_eq!(ibm_to_ieee(0xC276_A000), -118.625);
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(ieee_to_ibm(100.0).unwrap(), 0x4264_0000);
        assert_eq!(ieee_to_ibm(-100.0).unwrap(), 0xC264_0000);
        assert_eq!(ieee_to_ibm(1.0).unwrap(), 0x4110_0000);
        assert_eq!(ieee_to_ibm(0.5).unwrap(), 0x4080_0000);
        assert_eq!(ieee_to_ibm(-118.625).unwrap(), 0xC276_A000);
    }

    #[test]
    fn test_zero_words() {
        assert_eq!(ieee_to_ibm(0.0).unwrap(), 0);
        assert_eq!(ieee_to_ibm(-0.0).unwrap(), 0);
        assert_eq!(ibm_to_ieee(0).to_bits(), 0);
        // exponent bits with a zero fraction still decode as zero
        assert_eq!(ibm_to_ieee(0x4100_0000), 0.0);
        assert_eq!(ibm_to_ieee(0x8000_0000).to_bits(), 0x8000_0000);
    }

    #[test]
    fn test_overflow_and_underflow() {
        // 0.F * 16^63 is far beyond f32::MAX
        assert_eq!(ibm_to_ieee(0x7F10_0000), f32::INFINITY);
        assert_eq!(ibm_to_ieee(0xFF10_0000), f32::NEG_INFINITY);
        // 16^-64 is below the smallest subnormal
        assert_eq!(ibm_to_ieee(0x0010_0000), 0.0);
        // 0.1 * 16^-32 = 2^-132 lands in the subnormal range
        let sub = ibm_to_ieee(0x2010_0000);
        assert!(sub.is_subnormal());
        assert_eq!(sub, 2f32.powi(-132));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            ieee_to_ibm(f32::NAN),
            Err(SegyError::IbmOutOfRange { .. })
        ));
        assert!(matches!(
            ieee_to_ibm(f32::INFINITY),
            Err(SegyError::IbmOutOfRange { .. })
        ));
    }

    #[test]
    fn test_exact_powers_of_sixteen() {
        for k in -10..10 {
            let v = 16f32.powi(k);
            let word = ieee_to_ibm(v).unwrap();
            assert_eq!(word & 0x00FF_FFFF, 0x0010_0000, "16^{k}: fraction");
            assert_eq!(ibm_to_ieee(word), v, "16^{k}");
        }
    }

    #[test]
    fn test_roundtrip_tolerance() {
        let values = [
            1e-30f32, -3.5e-20, 1.234_567e-5, 0.1, -0.333, 3.14, 42.0, -1e6, 6.02e23, 1e30,
        ];
        for &v in &values {
            let back = ibm_to_ieee(ieee_to_ibm(v).unwrap());
            let rel = ((back - v) / v).abs();
            assert!(rel < 1e-5, "{v} came back as {back}");
            assert_eq!(back.is_sign_negative(), v.is_sign_negative());
        }
    }

    #[test]
    fn test_extreme_f32_values_encode() {
        for v in [f32::MAX, f32::MIN_POSITIVE, 1e-45] {
            let back = ibm_to_ieee(ieee_to_ibm(v).unwrap());
            assert!(((back - v) / v).abs() < 1e-5, "{v} came back as {back}");
        }
    }
}
