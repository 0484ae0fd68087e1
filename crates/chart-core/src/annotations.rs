// File: crates/chart-core/src/annotations.rs
// Summary: Metered-value labels and treatment glyphs for today's series.

use crate::config::ChartConfig;
use crate::scale::CoordinateMapper;
use crate::scene::{Frame, Layer, Primitive, Scene, TextAlign};
use crate::text::FontTier;
use crate::theme::Theme;
use crate::treatment::{Treatment, TreatmentKind};
use crate::types::Reading;
use crate::units::{insulin_amount, DisplayUnits};

const METERED_DOT_RADIUS: f32 = 3.0;
const TREATMENT_DOT_RADIUS: f32 = 3.5;
const STAGGER_SLOTS: usize = 5;

/// Sensor reading closest in time to `timestamp`; the first one wins ties.
pub fn nearest_sensor(timestamp: f64, sensor: &[Reading]) -> Option<&Reading> {
    let mut best: Option<(&Reading, f64)> = None;
    for r in sensor {
        let d = (r.timestamp - timestamp).abs();
        if d.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((r, d));
        }
    }
    best.map(|(r, _)| r)
}

/// Vertical distance above the paintable baseline for the `n`th treatment
/// label. Cycles through five slots so neighbours don't overlap.
pub fn stagger_offset(n: usize, compact: bool) -> i32 {
    let slot = (n % STAGGER_SLOTS) as i32;
    if compact {
        10 + slot * 20
    } else {
        25 + slot * 25
    }
}

/// "<carbs>g/<insulin>U" with empty parts dropped.
pub fn carbs_insulin_label(carbs: i32, insulin: f64) -> String {
    let mut label = String::new();
    if carbs > 0 {
        label.push_str(&format!("{carbs}g"));
        if insulin > 0.0 {
            label.push('/');
        }
    }
    if insulin > 0.0 {
        label.push_str(&format!("{}U", insulin_amount(insulin)));
    }
    label
}

pub fn metered_label(metered: f64, nearest: Option<&Reading>, units: DisplayUnits) -> String {
    let mut label = units.format(metered);
    if let Some(n) = nearest {
        label.push('/');
        label.push_str(&units.format(n.value));
    }
    label
}

pub struct AnnotationPainter<'a> {
    pub mapper: &'a CoordinateMapper,
    pub theme: &'a Theme,
    pub config: &'a ChartConfig,
    pub fonts: FontTier,
}

impl AnnotationPainter<'_> {
    fn ceiling(&self) -> f64 {
        self.config.bounds.max_display_value
    }

    /// Dot plus "metered/nearest sensor" label for each fingerstick value.
    pub fn paint_metered(&self, scene: &mut Scene, metered: &[Reading], sensor: &[Reading]) {
        for m in metered {
            let x = self.mapper.map_x(m.timestamp);
            let y = self.mapper.map_y_clamped(m.value, self.ceiling());
            let label = metered_label(m.value, nearest_sensor(m.timestamp, sensor), self.config.units);
            scene.text(
                Layer::Metered,
                label,
                Frame::new(x - 40.0, y - 20.0, 80.0, 18.0),
                self.fonts.metered,
                TextAlign::Left,
                self.theme.metered_label,
            );
            scene.push(
                Layer::Metered,
                Primitive::Dot { center: (x, y), radius: METERED_DOT_RADIUS, color: self.theme.marker },
            );
        }
    }

    /// Treatment labels and glyphs in timestamp order. Returns how many
    /// treatments were drawn.
    pub fn paint_treatments(&self, scene: &mut Scene, treatments: &[Treatment], sensor: &[Reading]) -> usize {
        let mut ordered: Vec<&Treatment> = treatments.iter().collect();
        ordered.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

        let compact = self.config.is_compact_offsets();
        let baseline = self.config.paintable_height();
        let mut treatment_number = 0usize;

        for t in ordered {
            let x = self.mapper.map_x(t.timestamp);
            let staggered_y = (baseline - stagger_offset(treatment_number, compact)) as f32;
            match t.kind {
                TreatmentKind::MealBolus { carbs, insulin } => {
                    self.carbs_marker(scene, carbs, insulin, x, staggered_y);
                    treatment_number += 1;
                }
                TreatmentKind::CorrectionBolus { .. } => {
                    let value = nearest_sensor(t.timestamp, sensor).map_or(0.0, |r| r.value);
                    let y = self.mapper.map_y_clamped(value, self.ceiling());
                    scene.push(
                        Layer::Treatment,
                        Primitive::Triangle {
                            points: [(x + 3.0, y), (x - 7.0, y), (x - 2.0, y + 5.0)],
                            color: self.theme.correction_glyph,
                        },
                    );
                    treatment_number += 1;
                }
                TreatmentKind::BolusWizard { insulin } if insulin > 0.0 => {
                    scene.text(
                        Layer::Treatment,
                        format!("{}U", insulin_amount(insulin)),
                        Frame::new(x - 15.0, staggered_y - 18.0, 40.0, 14.0),
                        self.fonts.chart,
                        TextAlign::Left,
                        self.theme.treatment_label,
                    );
                    self.treatment_dot(scene, x, staggered_y);
                    treatment_number += 1;
                }
                TreatmentKind::BolusWizard { .. } => {}
                TreatmentKind::CarbCorrection { carbs } => {
                    self.carbs_marker(scene, carbs, 0.0, x, staggered_y);
                    treatment_number += 1;
                }
            }
        }
        treatment_number
    }

    fn carbs_marker(&self, scene: &mut Scene, carbs: i32, insulin: f64, x: f32, y: f32) {
        scene.text(
            Layer::Treatment,
            carbs_insulin_label(carbs, insulin),
            Frame::new(x, y + 3.0, 60.0, 18.0),
            self.fonts.chart,
            TextAlign::Left,
            self.theme.treatment_label,
        );
        self.treatment_dot(scene, x, y);
    }

    fn treatment_dot(&self, scene: &mut Scene, x: f32, y: f32) {
        // 7x7 box anchored at (x-3, y-3)
        scene.push(
            Layer::Treatment,
            Primitive::Dot { center: (x + 0.5, y + 0.5), radius: TREATMENT_DOT_RADIUS, color: self.theme.marker },
        );
    }
}
