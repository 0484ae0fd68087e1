// File: crates/chart-core/src/units.rs
// Summary: Display-unit conversion for label text (geometry always stays in mg/dL).

use serde::{Deserialize, Serialize};

const MGDL_PER_MMOLL: f64 = 18.0182;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnits {
    #[default]
    MgDl,
    MmolL,
}

impl DisplayUnits {
    /// Label text for a value given in mg/dL.
    pub fn format(self, mgdl: f64) -> String {
        match self {
            DisplayUnits::MgDl => clean_number(mgdl),
            DisplayUnits::MmolL => format!("{:.1}", mgdl / MGDL_PER_MMOLL),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DisplayUnits::MgDl => "mg/dL",
            DisplayUnits::MmolL => "mmol/L",
        }
    }
}

/// Whole numbers without a fractional part, everything else unchanged.
pub fn clean_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Insulin amounts always keep at least one decimal ("2.0", "1.25").
pub fn insulin_amount(units: f64) -> String {
    if units.is_finite() && units.fract() == 0.0 {
        format!("{:.1}", units)
    } else {
        format!("{}", units)
    }
}
