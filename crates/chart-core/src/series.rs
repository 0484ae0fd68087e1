// File: crates/chart-core/src/series.rs
// Summary: Per-day glucose polylines with ceiling alarm recoloring and predicted-point fade.

use skia_safe as skia;

use crate::scale::CoordinateMapper;
use crate::scene::{Layer, Primitive, Scene};
use crate::theme::{Theme, DEFAULT_DAY1};
use crate::types::{Reading, MS_PER_SECOND};

pub const LINE_WIDTH: f32 = 2.0;
/// Seconds ahead of now at which a predicted point has faded out completely.
pub const PREDICTION_FADE_SECONDS: f64 = 4_200.0;
const PREDICTED_DOT_RADIUS: f32 = 1.0;

/// Everything the line painter needs besides the readings themselves.
#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    /// 1 = today.
    pub day_number: usize,
    pub color: skia::Color,
    /// Display maximum; values above it are drawn at this height.
    pub ceiling: f64,
    pub now_ms: f64,
}

/// Draw the connected line over consecutive sensor readings.
///
/// A segment is skipped when either end is invalid. Only segments drawn in
/// the default day-1 color take part in the two special cases: a segment
/// pinned to the ceiling at both ends turns into the alarm color, and a
/// segment ending in the future is replaced by a fading dot at its end point.
pub fn paint_sensor_line(
    scene: &mut Scene,
    mapper: &CoordinateMapper,
    theme: &Theme,
    sensor: &[Reading],
    style: LineStyle,
) {
    if sensor.len() < 2 {
        return;
    }
    let tracks_today = style.color == DEFAULT_DAY1;
    let ceiling_y = mapper.map_y(style.ceiling);

    for pair in sensor.windows(2) {
        let (begin, end) = (&pair[0], &pair[1]);
        if !begin.is_plottable() || !end.is_plottable() {
            continue;
        }

        let y0 = mapper.map_y_clamped(begin.value, style.ceiling);
        let y1 = mapper.map_y_clamped(end.value, style.ceiling);
        let x1 = mapper.map_x(end.timestamp);

        if tracks_today && end.is_predicted(style.now_ms) {
            let opacity = predicted_opacity(end.timestamp, style.now_ms);
            scene.push(
                Layer::Predicted,
                Primitive::Dot {
                    center: (x1 + PREDICTED_DOT_RADIUS, y1 + PREDICTED_DOT_RADIUS),
                    radius: PREDICTED_DOT_RADIUS,
                    color: theme.predicted_at(opacity),
                },
            );
            continue;
        }

        let color = if tracks_today && y0 == ceiling_y && y1 == ceiling_y {
            theme.alarm
        } else {
            style.color
        };
        scene.push(
            Layer::Series { day: style.day_number },
            Primitive::Line {
                from: (mapper.map_x(begin.timestamp), y0),
                to: (x1, y1),
                width: LINE_WIDTH,
                color,
            },
        );
    }
}

/// Opacity of a predicted point: 1.0 at `now_ms`, falling linearly to 0.0
/// at `now_ms` + 70 minutes, clamped on both sides.
pub fn predicted_opacity(timestamp: f64, now_ms: f64) -> f32 {
    let seconds_ahead = (timestamp - now_ms) / MS_PER_SECOND;
    (1.0 - seconds_ahead / PREDICTION_FADE_SECONDS).clamp(0.0, 1.0) as f32
}
