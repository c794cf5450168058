//! Classification of a single water reading against its ideal range.

use axolog_schemas::{profile::IdealRanges, CareProfile, ParameterKind, Range};
use serde::Serialize;
use std::fmt;

/// Default temperature above which a reading is dangerous rather than a
/// caution. The care tips say "never above 22 °C"; this stays at 20.
pub const TEMPERATURE_DANGER_ABOVE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Optimal,
    Caution,
    Dangerous,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Optimal => "Optimal",
            Tier::Caution => "Caution",
            Tier::Dangerous => "Dangerous!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Optimal => "✅",
            Tier::Caution => "⚠️",
            Tier::Dangerous => "❌",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies `value` for `kind` given its ideal range.
///
/// In range is optimal. Out of range is dangerous when the temperature is
/// above `temperature_danger_above`, or when ammonia or nitrite exceed the
/// ideal maximum. Everything else out of range (pH either way, a cold tank, a
/// slightly warm one) is a caution.
pub fn classify(kind: ParameterKind, value: f64, ideal: Range, temperature_danger_above: f64) -> Tier {
    if ideal.contains(value) {
        return Tier::Optimal;
    }

    let dangerous = match kind {
        ParameterKind::Temperature => value > temperature_danger_above,
        ParameterKind::Ammonia | ParameterKind::Nitrite => value > ideal.max,
        ParameterKind::Ph => false,
    };

    if dangerous {
        Tier::Dangerous
    } else {
        Tier::Caution
    }
}

/// Classifies a reading with the built-in ideal ranges.
pub fn evaluate_parameter(kind: ParameterKind, value: f64) -> Tier {
    ParameterEvaluator::default().evaluate(kind, value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEvaluator {
    ideal_ranges: IdealRanges,
    temperature_danger_above: f64,
}

impl ParameterEvaluator {
    pub fn from_profile(profile: &CareProfile) -> Self {
        Self {
            ideal_ranges: profile.ideal_ranges.clone(),
            temperature_danger_above: profile.temperature_danger_above,
        }
    }

    pub fn ideal_range(&self, kind: ParameterKind) -> Range {
        self.ideal_ranges.get(kind)
    }

    pub fn evaluate(&self, kind: ParameterKind, value: f64) -> Tier {
        classify(kind, value, self.ideal_range(kind), self.temperature_danger_above)
    }
}

impl Default for ParameterEvaluator {
    fn default() -> Self {
        Self {
            ideal_ranges: IdealRanges::default(),
            temperature_danger_above: TEMPERATURE_DANGER_ABOVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_tiers() {
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 16.0), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 18.0), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 18.5), Tier::Caution);
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 20.0), Tier::Caution);
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 20.5), Tier::Dangerous);
        assert_eq!(evaluate_parameter(ParameterKind::Temperature, 12.0), Tier::Caution);
    }

    #[test]
    fn ph_is_never_dangerous() {
        assert_eq!(evaluate_parameter(ParameterKind::Ph, 7.4), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Ph, 5.0), Tier::Caution);
        assert_eq!(evaluate_parameter(ParameterKind::Ph, 9.0), Tier::Caution);
    }

    #[test]
    fn nitrogen_compounds_above_max_are_dangerous() {
        assert_eq!(evaluate_parameter(ParameterKind::Ammonia, 0.0), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Ammonia, 0.02), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Ammonia, 0.03), Tier::Dangerous);
        assert_eq!(evaluate_parameter(ParameterKind::Nitrite, 0.2), Tier::Optimal);
        assert_eq!(evaluate_parameter(ParameterKind::Nitrite, 0.25), Tier::Dangerous);
    }

    #[test]
    fn profile_overrides_ranges_and_threshold() {
        let mut profile = CareProfile::default();
        profile.ideal_ranges.temperature = Range::new(15.0, 19.0);
        profile.temperature_danger_above = 22.0;
        let evaluator = ParameterEvaluator::from_profile(&profile);

        assert_eq!(evaluator.evaluate(ParameterKind::Temperature, 19.0), Tier::Optimal);
        assert_eq!(evaluator.evaluate(ParameterKind::Temperature, 21.0), Tier::Caution);
        assert_eq!(evaluator.evaluate(ParameterKind::Temperature, 22.5), Tier::Dangerous);
    }
}
