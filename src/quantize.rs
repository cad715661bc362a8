//! Voltage-to-code conversion between the analog and digital domains.
//!
//! The converter maps the 0–5 V TTL range onto a 10-bit code range,
//! so full scale (5 V) lands on code 1023 and the midpoint (2.5 V) on
//! code 512. Demos of this kind are often loosely described as 8-bit;
//! the range here is genuinely 10-bit and the 1023 full scale is kept.
//! Both directions are plain linear scaling; codes stay in floating
//! point so the two functions are exact inverses for every integral
//! code.
//!
//! Out-of-range voltages are deliberately not clamped: a 6 V input
//! yields code 1228. The conversion mirrors an ideal ratio, not a
//! saturating part, and the demos never leave the TTL range anyway.
//!
//! Rounding uses ties-to-even, so a voltage that falls exactly between
//! two codes goes to the even one. Both demos cross the 2.5 V midpoint,
//! which scales to exactly 511.5 and resolves to the even code 512.

/// Highest code of the 10-bit converter range.
pub const CODE_MAX: f64 = 1023.0;

/// Full-scale voltage of the TTL range.
pub const V_MAX: f64 = 5.0;

/// Converts a voltage to the nearest converter code.
///
/// # Arguments
///
/// * `volts` - Input voltage, nominally within 0 to [`V_MAX`]
///
/// # Returns
///
/// The code as a float, rounded ties-to-even. Inputs outside the TTL
/// range produce codes outside 0 to [`CODE_MAX`].
///
/// # Examples
///
/// ```
/// use stairstep::quantize::to_digital;
///
/// assert_eq!(to_digital(0.0), 0.0);
/// assert_eq!(to_digital(5.0), 1023.0);
/// assert_eq!(to_digital(2.5), 512.0);
/// ```
pub fn to_digital(volts: f64) -> f64 {
    ((volts * CODE_MAX) / V_MAX).round_ties_even()
}

/// Converts a converter code back to a TTL voltage.
///
/// # Arguments
///
/// * `code` - Converter code, nominally within 0 to [`CODE_MAX`]
///
/// # Returns
///
/// The reconstructed voltage. No rounding is applied, so fractional
/// codes map to fractional voltages.
///
/// # Examples
///
/// ```
/// use stairstep::quantize::to_ttl;
///
/// assert_eq!(to_ttl(0.0), 0.0);
/// assert_eq!(to_ttl(1023.0), 5.0);
/// ```
pub fn to_ttl(code: f64) -> f64 {
    (code * V_MAX) / CODE_MAX
}
