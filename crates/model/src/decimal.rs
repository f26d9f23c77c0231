use std::{
    fmt::{Debug, Display},
    iter::Sum,
    str::FromStr,
};

const DECIMALS: u8 = 2;
const SCALE: i64 = 10i64.pow(DECIMALS as u32);

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i64);

impl Decimal {
    pub fn int(value: i64) -> Decimal {
        Decimal(value.saturating_mul(SCALE))
    }

    pub fn zero() -> Decimal {
        Decimal(0)
    }

    /// Lenient parse used for free-text metric fields: empty or non-numeric text is zero.
    pub fn parse_or_zero(value: &str) -> Decimal {
        value.parse().unwrap_or_default()
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal((value * SCALE as f64).round() as i64)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim().replace(',', ".");
        let val = value.parse::<f64>().map_err(|_| ParseDecimalError)?;
        let scaled = (val * SCALE as f64).round();
        // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(ParseDecimalError);
        }
        Ok(Decimal(scaled as i64))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, other: Decimal) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        Decimal(self.0.saturating_add(other.0))
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to parse decimal value")]
pub struct ParseDecimalError;
