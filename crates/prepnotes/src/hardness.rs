//! Coarse hardness buckets derived from mixed-unit hardness readings.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardnessCategory {
    Soft,
    Medium,
    Hard,
    VeryHard,
}

impl HardnessCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            HardnessCategory::Soft => "soft",
            HardnessCategory::Medium => "medium",
            HardnessCategory::Hard => "hard",
            HardnessCategory::VeryHard => "very-hard",
        }
    }

    fn from_brinell(hb: i64) -> Self {
        if hb < 150 {
            HardnessCategory::Soft
        } else if hb < 250 {
            HardnessCategory::Medium
        } else {
            HardnessCategory::Hard
        }
    }

    fn from_rockwell_c(hrc: i64) -> Self {
        if hrc < 30 {
            HardnessCategory::Soft
        } else if hrc < 50 {
            HardnessCategory::Medium
        } else {
            HardnessCategory::Hard
        }
    }
}

impl fmt::Display for HardnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a material from its free-text `hardness` and the per-scale
/// sub-fields. Unit checks run in fixed order HV, HB, HRC; the first that
/// applies decides, even when a later scale is also populated.
pub fn classify(
    hardness: &str,
    hardness_hb: &str,
    hardness_hrc: &str,
    hardness_hv: &str,
) -> HardnessCategory {
    if hardness.is_empty() {
        return HardnessCategory::Medium;
    }

    let Some(magnitude) = first_number(hardness) else {
        return HardnessCategory::Medium;
    };
    let units = hardness.to_uppercase();

    if units.contains("HV") || parse_int(hardness_hv).is_some_and(|hv| hv > 1000) {
        return HardnessCategory::VeryHard;
    }

    let hb = parse_int(hardness_hb);
    if units.contains("HB") || hb.is_some_and(|v| v > 0) {
        let value = if units.contains("HB") {
            magnitude
        } else {
            hb.unwrap_or(0)
        };
        return HardnessCategory::from_brinell(value);
    }

    let hrc = parse_int(hardness_hrc);
    if units.contains("HRC") || hrc.is_some_and(|v| v > 0) {
        let value = if units.contains("HRC") {
            magnitude
        } else {
            hrc.unwrap_or(0)
        };
        return HardnessCategory::from_rockwell_c(value);
    }

    HardnessCategory::Medium
}

fn first_number(text: &str) -> Option<i64> {
    FIRST_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
