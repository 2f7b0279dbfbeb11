//! Rounding conventions.

/// How an amount is brought to a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Midpoints go to the even neighbour (banker's rounding).
    #[default]
    HalfToEven,
    /// Midpoints go away from zero (schoolbook rounding).
    HalfAwayFromZero,
    /// Midpoints go towards zero.
    HalfTowardZero,
    /// Truncate: always towards zero.
    ToZero,
    /// Always away from zero.
    AwayFromZero,
    /// Always towards positive infinity.
    Ceiling,
    /// Always towards negative infinity.
    Floor,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::HalfToEven,
        RoundingMode::HalfAwayFromZero,
        RoundingMode::HalfTowardZero,
        RoundingMode::ToZero,
        RoundingMode::AwayFromZero,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ];

    /// Return `true` if this mode only differs from truncation at midpoints.
    pub fn is_midpoint(&self) -> bool {
        matches!(
            self,
            RoundingMode::HalfToEven | RoundingMode::HalfAwayFromZero | RoundingMode::HalfTowardZero
        )
    }

    /// Whether `mode(-x) == -mode(x)` holds for every `x`.
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, RoundingMode::Ceiling | RoundingMode::Floor)
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::HalfToEven => "HalfToEven",
            RoundingMode::HalfAwayFromZero => "HalfAwayFromZero",
            RoundingMode::HalfTowardZero => "HalfTowardZero",
            RoundingMode::ToZero => "ToZero",
            RoundingMode::AwayFromZero => "AwayFromZero",
            RoundingMode::Ceiling => "Ceiling",
            RoundingMode::Floor => "Floor",
        };
        f.write_str(name)
    }
}
