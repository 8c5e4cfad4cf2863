/// Decimal precision for display (percentages and currency amounts)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of compounding periods per year used by projections
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of a Permanent Account Number
pub const PAN_LENGTH: usize = 10;
