// File: crates/chart-core/src/treatment.rs
// Summary: Insulin/carbohydrate treatment events.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TreatmentKind {
    MealBolus { carbs: i32, insulin: f64 },
    CorrectionBolus { insulin: f64 },
    BolusWizard { insulin: f64 },
    CarbCorrection { carbs: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Treatment {
    pub id: String,
    /// Epoch milliseconds.
    pub timestamp: f64,
    pub kind: TreatmentKind,
}

impl Treatment {
    pub fn new(id: impl Into<String>, timestamp: f64, kind: TreatmentKind) -> Self {
        Self { id: id.into(), timestamp, kind }
    }

    pub fn meal_bolus(id: impl Into<String>, timestamp: f64, carbs: i32, insulin: f64) -> Self {
        Self::new(id, timestamp, TreatmentKind::MealBolus { carbs, insulin })
    }

    pub fn correction_bolus(id: impl Into<String>, timestamp: f64, insulin: f64) -> Self {
        Self::new(id, timestamp, TreatmentKind::CorrectionBolus { insulin })
    }

    pub fn bolus_wizard(id: impl Into<String>, timestamp: f64, insulin: f64) -> Self {
        Self::new(id, timestamp, TreatmentKind::BolusWizard { insulin })
    }

    pub fn carb_correction(id: impl Into<String>, timestamp: f64, carbs: i32) -> Self {
        Self::new(id, timestamp, TreatmentKind::CarbCorrection { carbs })
    }

    /// Nightscout `eventType` string for this variant.
    pub fn event_type(&self) -> &'static str {
        match self.kind {
            TreatmentKind::MealBolus { .. } => "Meal Bolus",
            TreatmentKind::CorrectionBolus { .. } => "Correction Bolus",
            TreatmentKind::BolusWizard { .. } => "Bolus Wizard",
            TreatmentKind::CarbCorrection { .. } => "Carb Correction",
        }
    }
}
