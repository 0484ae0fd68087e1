// File: crates/chart-core/tests/axis.rs
// Purpose: Band, hour ticks/labels, value-bound labels and legend placement.

mod common;

use chrono::{TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use common::{HOUR, MINUTE};
use glucose_chart_core::axis::AxisPainter;
use glucose_chart_core::grid::{hour_label, hour_ticks, HourStep};
use glucose_chart_core::text::{FontTier, LEGEND_FONT_SIZE};
use glucose_chart_core::{ChartConfig, CoordinateMapper, Layer, Primitive, Scene, Theme, ViewState};

fn at(h: u32, m: u32) -> f64 {
    Utc.with_ymd_and_hms(2024, 3, 5, h, m, 0).unwrap().timestamp_millis() as f64
}

fn view(x_min: f64, x_max: f64, y_max: f64) -> ViewState {
    ViewState { x_min, x_max, y_min: 70.0, y_max }
}

fn frames(scene: &Scene, layer: Layer) -> Vec<(String, f32, f32)> {
    scene
        .in_layer(layer)
        .filter_map(|p| match p {
            Primitive::Text { text, frame, .. } => Some((text.clone(), frame.x, frame.y)),
            _ => None,
        })
        .collect()
}

#[test]
fn ticks_fall_on_full_hours_strictly_inside_the_range() {
    let ticks = hour_ticks(&Utc, at(10, 30), at(13, 0), HourStep::Every);
    assert_eq!(ticks, vec![at(11, 0), at(12, 0)]);
}

#[test]
fn every_second_hour_lands_on_even_hours() {
    let ticks = hour_ticks(&Utc, at(10, 30), at(16, 30), HourStep::EverySecond);
    assert_eq!(ticks, vec![at(12, 0), at(14, 0), at(16, 0)]);

    let from_odd = hour_ticks(&Utc, at(11, 10), at(15, 0), HourStep::EverySecond);
    assert_eq!(from_odd, vec![at(12, 0), at(14, 0)]);
}

#[test]
fn open_range_has_no_ticks() {
    assert!(hour_ticks(&Utc, f64::INFINITY, f64::NEG_INFINITY, HourStep::Every).is_empty());
}

#[test]
fn labels_use_24_hour_clock() {
    assert_eq!(hour_label(&Utc, at(9, 0)), "09:00");
    assert_eq!(hour_label(&Utc, at(21, 0)), "21:00");
}

/// Ticks from 00:30 Berlin time on `day` over the next seven hours, as local
/// "HH:MM<zone>" strings.
fn berlin_ticks(day: u32, month: u32, step: HourStep) -> Vec<String> {
    let start = Berlin.with_ymd_and_hms(2024, month, day, 0, 30, 0).unwrap().timestamp_millis() as f64;
    hour_ticks(&Berlin, start, start + 7.0 * HOUR, step)
        .into_iter()
        .map(|ms| Berlin.timestamp_millis_opt(ms as i64).unwrap().format("%H:%M%Z").to_string())
        .collect()
}

#[test]
fn fall_back_skips_the_repeated_hour() {
    assert_eq!(
        berlin_ticks(27, 10, HourStep::Every),
        vec!["01:00CEST", "02:00CEST", "03:00CET", "04:00CET", "05:00CET", "06:00CET"]
    );
    assert_eq!(
        berlin_ticks(27, 10, HourStep::EverySecond),
        vec!["02:00CEST", "03:00CET", "04:00CET", "06:00CET"]
    );
}

#[test]
fn spring_forward_jumps_the_missing_hour() {
    assert_eq!(
        berlin_ticks(31, 3, HourStep::Every),
        vec!["01:00CET", "03:00CEST", "04:00CEST", "05:00CEST", "06:00CEST", "07:00CEST", "08:00CEST"]
    );
    assert_eq!(
        berlin_ticks(31, 3, HourStep::EverySecond),
        vec!["03:00CEST", "04:00CEST", "06:00CEST", "08:00CEST"]
    );
}

#[test]
fn ticks_stay_one_real_hour_apart_away_from_transitions() {
    let ticks = hour_ticks(&Berlin, at(6, 30), at(10, 30), HourStep::Every);
    assert_eq!(ticks.len(), 4);
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == HOUR));
    assert_eq!(hour_label(&Berlin, ticks[0]), "08:00");
}

#[test]
fn step_widens_past_six_hours_on_narrow_canvases() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone();
    let fonts = FontTier::for_config(&cfg);

    let six = CoordinateMapper::for_config(&cfg, view(at(6, 0), at(6, 0) + 6.0 * HOUR, 180.0));
    let axis = AxisPainter { mapper: &six, theme: &theme, config: &cfg, fonts };
    assert_eq!(axis.hour_step(), HourStep::Every);

    let seven = CoordinateMapper::for_config(&cfg, view(at(6, 0), at(13, 0), 180.0));
    let axis = AxisPainter { mapper: &seven, theme: &theme, config: &cfg, fonts };
    assert_eq!(axis.hour_step(), HourStep::EverySecond);

    let wide_cfg = ChartConfig::phone().with_size(1920, 400);
    let wide = CoordinateMapper::for_config(&wide_cfg, view(at(6, 0), at(13, 0), 180.0));
    let axis = AxisPainter { mapper: &wide, theme: &theme, config: &wide_cfg, fonts };
    assert_eq!(axis.hour_step(), HourStep::Every);
}

#[test]
fn hour_labels_are_centered_above_the_label_strip() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone();
    let mapper = CoordinateMapper::for_config(&cfg, view(at(10, 30), at(13, 30), 180.0));
    let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };

    let mut scene = Scene::new(true);
    axis.paint_hours(&mut scene, &Utc);

    let labels = frames(&scene, Layer::HourLabel);
    let texts: Vec<&str> = labels.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["11:00", "12:00", "13:00"]);
    assert_eq!(labels[0].1, mapper.map_x(at(11, 0)) - 25.0);
    assert_eq!(labels[0].2, 130.0);

    let grid: Vec<&Primitive> = scene.in_layer(Layer::HourGrid).collect();
    assert_eq!(grid.len(), 3);
    match grid[1] {
        Primitive::Line { from, to, width, color } => {
            assert_eq!(from.1, 0.0);
            assert_eq!(to.1, 130.0);
            assert_eq!(from.0, to.0);
            assert_eq!(*width, 1.0);
            assert_eq!(*color, theme.gridline);
        }
        other => panic!("expected gridline, got {other:?}"),
    }
}

#[test]
fn band_spans_the_nice_range_across_the_canvas() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone().with_bounds(300.0, 180.0, 70.0);
    let mapper = CoordinateMapper::for_config(&cfg, view(0.0, 60.0 * MINUTE, 300.0));
    let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };

    let mut scene = Scene::new(true);
    axis.paint_band(&mut scene);
    match &scene.items()[0].primitive {
        Primitive::Rect { frame, color } => {
            assert_eq!(frame.x, 0.0);
            assert_eq!(frame.width, 350.0);
            assert_eq!(frame.y, mapper.map_y(180.0));
            assert_eq!(frame.bottom(), mapper.map_y(70.0));
            assert_eq!(*color, theme.band);
        }
        other => panic!("expected band rect, got {other:?}"),
    }
}

#[test]
fn value_labels_repeat_every_200_pixels() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone().with_bounds(300.0, 180.0, 70.0);
    let mapper = CoordinateMapper::for_config(&cfg, view(0.0, HOUR, 180.0));
    let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };

    let mut scene = Scene::new(true);
    axis.paint_value_labels(&mut scene);
    let labels = frames(&scene, Layer::ValueLabel);
    assert_eq!(labels.len(), 4);
    let xs: Vec<f32> = labels.iter().map(|l| l.1).collect();
    assert_eq!(xs, vec![5.0, 5.0, 205.0, 205.0]);
    assert_eq!(labels[0].0, "180");
    assert_eq!(labels[0].2, mapper.map_y(180.0));
    assert_eq!(labels[1].0, "70");
    assert_eq!(labels[1].2, mapper.map_y(70.0) - 15.0);
}

#[test]
fn maximum_label_needs_clearance_above_upper_bound() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone().with_bounds(300.0, 180.0, 70.0);

    let count = |y_max: f64| {
        let mapper = CoordinateMapper::for_config(&cfg, view(0.0, HOUR, y_max));
        let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };
        let mut scene = Scene::new(true);
        axis.paint_value_labels(&mut scene);
        frames(&scene, Layer::ValueLabel)
    };

    assert_eq!(count(205.0).len(), 4);
    let with_max = count(206.0);
    assert_eq!(with_max.len(), 6);
    assert_eq!(with_max[0].0, "206");
    assert_eq!(with_max[0].2, 3.0);
}

#[test]
fn legend_packs_against_the_right_edge() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone();
    let mapper = CoordinateMapper::for_config(&cfg, view(0.0, HOUR, 180.0));
    let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };

    let mut scene = Scene::new(true);
    axis.paint_legend(&mut scene, 3);
    let entries: Vec<(&str, f32, f32, skia_safe::Color)> = scene
        .in_layer(Layer::Legend)
        .filter_map(|p| match p {
            Primitive::Text { text, frame, size, color, .. } => {
                assert_eq!(*size, LEGEND_FONT_SIZE);
                Some((text.as_str(), frame.x, frame.y, *color))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        entries,
        vec![
            ("D1", 284.0, 20.0, theme.day_color(1, false)),
            ("D2", 304.0, 20.0, theme.day_color(2, false)),
            ("D3", 324.0, 20.0, theme.day_color(3, false)),
        ]
    );
}

#[test]
fn legend_stops_at_five_days() {
    let theme = Theme::default();
    let cfg = ChartConfig::phone();
    let mapper = CoordinateMapper::for_config(&cfg, view(0.0, HOUR, 180.0));
    let axis = AxisPainter { mapper: &mapper, theme: &theme, config: &cfg, fonts: FontTier::for_config(&cfg) };

    let mut scene = Scene::new(true);
    axis.paint_legend(&mut scene, 8);
    let names: Vec<&str> = scene.texts().collect();
    assert_eq!(names, vec!["D1", "D2", "D3", "D4", "D5"]);
}
