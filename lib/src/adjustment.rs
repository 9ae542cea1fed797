use std::str::FromStr;

use regex::Regex;

use crate::errors::*;
use crate::session::BrightnessRange;

make_log_macro!(debug, "adjustment");

/// `[+|-|=]NUMBER[%|%%]`
const LEVEL_PATTERN: &str = r"^([+=-]?)(\d+(?:\.\d*)?|\.\d+)(%{0,2})$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Raw device units
    Raw,
    /// Percentage points of the device's range
    PercentOfMax,
    /// Percent of the brightness at the time of the change
    PercentOfCurrent,
}

/// A one-shot brightness change such as `=50%`, `+10` or `-25%%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    /// Move from the current value instead of replacing it
    pub relative: bool,
    /// Signed; negative only when `relative`
    pub amount: f64,
    pub unit: Unit,
}

impl FromStr for Adjustment {
    type Err = AdjbacklightError;

    fn from_str(level: &str) -> Result<Self> {
        let invalid = || AdjbacklightError::InvalidAdjustment(level.to_string());
        let captures = Regex::new(LEVEL_PATTERN)?
            .captures(level)
            .ok_or_else(invalid)?;

        let magnitude: f64 = captures[2].parse().map_err(|_| invalid())?;
        let (relative, amount) = match &captures[1] {
            "+" => (true, magnitude),
            "-" => (true, -magnitude),
            _ => (false, magnitude),
        };
        let unit = match captures[3].len() {
            0 => Unit::Raw,
            1 => Unit::PercentOfMax,
            _ => Unit::PercentOfCurrent,
        };

        let adjustment = Self {
            relative,
            amount,
            unit,
        };
        debug!("{:?} parsed as {:?}", level, adjustment);
        Ok(adjustment)
    }
}

impl Adjustment {
    /// The brightness this adjustment leads to from `current`, clamped to `range`.
    pub fn apply(&self, range: BrightnessRange, current: i64) -> i64 {
        let magnitude = self.amount.abs();
        // whole units: raw amounts round their fraction, percentages truncate
        let whole = (match self.unit {
            Unit::Raw => magnitude.trunc() + (magnitude.fract() + 0.5).floor(),
            Unit::PercentOfMax => (magnitude * range.span() as f64 / 100.0).trunc(),
            Unit::PercentOfCurrent => (magnitude * current as f64 / 100.0).trunc(),
        }) as i64;

        let target = if !self.relative {
            range.min().saturating_add(whole)
        } else if self.amount < 0.0 {
            current.saturating_sub(whole)
        } else {
            current.saturating_add(whole)
        };
        range.clamp(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> BrightnessRange {
        BrightnessRange::new(0, 1000).unwrap()
    }

    fn apply(level: &str, current: i64) -> i64 {
        level.parse::<Adjustment>().unwrap().apply(range(), current)
    }

    #[test]
    fn parses_prefix_and_suffix() {
        assert_eq!(
            "=50%".parse::<Adjustment>().unwrap(),
            Adjustment {
                relative: false,
                amount: 50.0,
                unit: Unit::PercentOfMax
            }
        );
        assert_eq!(
            "-2.5%%".parse::<Adjustment>().unwrap(),
            Adjustment {
                relative: true,
                amount: -2.5,
                unit: Unit::PercentOfCurrent
            }
        );
        assert_eq!(
            "120".parse::<Adjustment>().unwrap(),
            Adjustment {
                relative: false,
                amount: 120.0,
                unit: Unit::Raw
            }
        );
        assert_eq!("+.5".parse::<Adjustment>().unwrap().amount, 0.5);
    }

    #[test]
    fn rejects_malformed_levels() {
        for level in ["", "%", "+", "=-5", "5%%%", "5a", "1.2.3", "five", "+ 5", "5 %"] {
            assert!(
                matches!(
                    level.parse::<Adjustment>(),
                    Err(AdjbacklightError::InvalidAdjustment(_))
                ),
                "{level:?}"
            );
        }
    }

    #[test]
    fn raw_units() {
        assert_eq!(apply("300", 700), 300);
        assert_eq!(apply("=300", 700), 300);
        assert_eq!(apply("+25", 700), 725);
        assert_eq!(apply("-25", 700), 675);
    }

    #[test]
    fn percent_of_max() {
        assert_eq!(apply("50%", 100), 500);
        assert_eq!(apply("+10%", 100), 200);
        assert_eq!(apply("-10%", 100), 0);
        assert_eq!(apply("=0.05%", 0), 0);
        assert_eq!(apply("+0.15%", 100), 101);
        assert_eq!(apply("-0.15%", 100), 99);
    }

    #[test]
    fn percent_of_current() {
        assert_eq!(apply("50%%", 600), 300);
        assert_eq!(apply("+50%%", 600), 900);
        assert_eq!(apply("-25%%", 600), 450);
        assert_eq!(apply("+15%%", 10), 11);
        assert_eq!(apply("=15%%", 10), 1);
    }

    #[test]
    fn raw_fraction_rounds_half_up() {
        assert_eq!(apply("=2.5", 0), 3);
        assert_eq!(apply("=2.4", 0), 2);
        assert_eq!(apply("+.5", 100), 101);
        assert_eq!(apply("-1.5", 100), 98);
    }

    #[test]
    fn results_are_clamped() {
        assert_eq!(apply("5000", 10), 1000);
        assert_eq!(apply("+200%", 10), 1000);
        assert_eq!(apply("-5000", 10), 0);
        assert_eq!(apply("-100%%", 10), 0);
    }
}
