use rust_decimal::Decimal;

/// Whole number of people (cases, infections, patients)
///
/// 128 bits wide so months-scale doubling of a few hundred reported cases
/// still fits.
pub type Count = u128;

/// Signed bed balance - negative means a deficit
pub type BedBalance = i128;

/// Whole currency units
pub type Dollars = u128;

/// Fractional rate or multiplier - uses Decimal so truncation is exact
pub type Rate = Decimal;
