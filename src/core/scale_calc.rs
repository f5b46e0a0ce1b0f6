use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{Scale, pivot};
use crate::error::{ChartError, ChartResult};

pub(crate) const AXIS_VALUE_TARGET_SPACING_PX: f64 = 45.0;
pub(crate) const AXIS_VALUE_MIN_TICKS: usize = 2;
pub(crate) const AXIS_VALUE_MAX_TICKS: usize = 12;

/// Series stacking mode used while extracting the value-axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Stacked {
    /// Each value contributes to the extent individually.
    #[default]
    None,
    /// Per-category sums across series replace individual values, so the
    /// extent reflects cumulative totals.
    Normal,
}

/// One step of the tick-label display pipeline, applied in sequence.
///
/// Steps are pure functions of the numeric tick value and the label built so
/// far; they never feed back into the numeric scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Re-renders the value with a fixed number of fraction digits.
    Precision { digits: u8 },
    /// Inserts `,` separators into the integer part of the label.
    ThousandsComma,
    Prefix { text: String },
    Suffix { text: String },
}

/// Numeric axis layout: a nice scale plus the tick grid that fits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisData {
    pub scale: Scale,
    pub tick_count: usize,
    pub labels: Vec<String>,
    /// Authoritative count for dependent components. Starts equal to
    /// `tick_count`; callers that override spacing adjust this one.
    pub valid_tick_count: usize,
}

/// Categorical axis layout: one tick per category label, no numeric scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAxisData {
    pub labels: Vec<String>,
    pub tick_count: usize,
    pub valid_tick_count: usize,
}

/// Caller overrides for the value-axis extent, applied before nicing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueAxisOptions {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Input bundle for [`make_value_axis_data`].
#[derive(Debug, Clone)]
pub struct ValueAxisInput<'a> {
    pub values: &'a [Vec<f64>],
    /// Pixel length of the plotting area along the value axis.
    pub series_dimension: f64,
    pub stacked: Stacked,
    pub chart_type: &'a str,
    pub format_functions: &'a [LabelFormat],
    pub options: ValueAxisOptions,
}

/// Derives a nice numeric scale and tick layout from raw series values.
///
/// The raw extent is rounded outward to 1-2-5 step-family boundaries so that
/// axis labels land on round numbers, and the tick count is targeted from the
/// available pixel length (more pixels allow more ticks, never fewer than
/// two) before being snapped onto exact step multiples.
pub fn make_value_axis_data(input: ValueAxisInput<'_>) -> ChartResult<ValueAxisData> {
    if input.values.iter().all(Vec::is_empty) {
        return Err(ChartError::Configuration(
            "value axis requires at least one series value".to_owned(),
        ));
    }
    if !(input.series_dimension > 0.0) {
        return Err(ChartError::Configuration(format!(
            "series dimension must be positive, got {}",
            input.series_dimension
        )));
    }

    let candidates: Vec<f64> = match input.stacked {
        Stacked::None => input.values.iter().flatten().copied().collect(),
        Stacked::Normal => pivot(input.values)
            .iter()
            .map(|per_category| per_category.iter().sum())
            .collect(),
    };

    let raw_min = extent_min(&candidates);
    let raw_max = extent_max(&candidates);
    let raw_min = input.options.min.unwrap_or(raw_min).min(raw_min);
    let raw_max = input.options.max.unwrap_or(raw_max).max(raw_max);

    let target_ticks = axis_tick_target_count(
        input.series_dimension,
        AXIS_VALUE_TARGET_SPACING_PX,
        AXIS_VALUE_MIN_TICKS,
        AXIS_VALUE_MAX_TICKS,
    );
    let (scale, step, tick_count) = nice_scale(raw_min, raw_max, target_ticks);

    let labels = (0..tick_count)
        .map(|index| format_label(scale.min + step * index as f64, input.format_functions))
        .collect();

    debug!(
        chart_type = input.chart_type,
        raw_min,
        raw_max,
        scale_min = scale.min,
        scale_max = scale.max,
        tick_count,
        "derived value axis data"
    );

    Ok(ValueAxisData {
        scale,
        tick_count,
        labels,
        valid_tick_count: tick_count,
    })
}

/// Derives label-axis data from category names: one tick per category.
pub fn make_label_axis_data(labels: &[String]) -> ChartResult<LabelAxisData> {
    if labels.is_empty() {
        return Err(ChartError::Configuration(
            "label axis requires at least one category label".to_owned(),
        ));
    }

    Ok(LabelAxisData {
        labels: labels.to_vec(),
        tick_count: labels.len(),
        valid_tick_count: labels.len(),
    })
}

fn extent_min(candidates: &[f64]) -> f64 {
    candidates
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map(OrderedFloat::into_inner)
        .unwrap_or(0.0)
}

fn extent_max(candidates: &[f64]) -> f64 {
    candidates
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
        .unwrap_or(0.0)
}

pub(crate) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds `raw_min`/`raw_max` outward onto multiples of a 1-2-5 step sized
/// for `target_ticks`, returning the nice scale, the step, and the exact
/// number of ticks that fit between the nice boundaries.
///
/// `target_ticks` caps the step size only; rounding the extent outward can
/// yield one or two ticks beyond it.
pub(crate) fn nice_scale(raw_min: f64, raw_max: f64, target_ticks: usize) -> (Scale, f64, usize) {
    let (mut min, mut max) = (raw_min, raw_max);
    if min == max {
        // Degenerate extent: widen so a step exists.
        if min == 0.0 {
            max = 1.0;
        } else {
            let pad = min.abs() / 2.0;
            min -= pad;
            max += pad;
        }
    }

    let intervals = (target_ticks.max(AXIS_VALUE_MIN_TICKS) - 1) as f64;
    let step = nice_step((max - min) / intervals);
    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;
    let tick_count = ((nice_max - nice_min) / step).round() as usize + 1;

    (Scale::new(nice_min, nice_max), step, tick_count)
}

/// Smallest value from the 1-2-5 step family that covers `raw_step`.
fn nice_step(raw_step: f64) -> f64 {
    let abs_step = raw_step.abs().max(f64::MIN_POSITIVE);
    let magnitude = 10_f64.powf(abs_step.log10().floor());

    for factor in [1.0, 2.0, 5.0, 10.0] {
        let candidate = magnitude * factor;
        if candidate >= abs_step {
            return candidate;
        }
    }

    magnitude * 10.0
}

/// Renders one numeric value through the display-label pipeline.
#[must_use]
pub fn format_label(value: f64, pipeline: &[LabelFormat]) -> String {
    let mut label = canonical_number(value);
    for step in pipeline {
        label = match step {
            LabelFormat::Precision { digits } => {
                format!("{value:.precision$}", precision = *digits as usize)
            }
            LabelFormat::ThousandsComma => group_thousands(&label),
            LabelFormat::Prefix { text } => format!("{text}{label}"),
            LabelFormat::Suffix { text } => format!("{label}{text}"),
        };
    }
    label
}

fn canonical_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn group_thousands(label: &str) -> String {
    let (sign, unsigned) = match label.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", label),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if !int_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return label.to_owned();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, ch) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LabelFormat, Stacked, ValueAxisInput, ValueAxisOptions, axis_tick_target_count,
        format_label, make_label_axis_data, make_value_axis_data, nice_scale, nice_step,
    };
    use crate::error::ChartError;

    fn input<'a>(values: &'a [Vec<f64>], series_dimension: f64) -> ValueAxisInput<'a> {
        ValueAxisInput {
            values,
            series_dimension,
            stacked: Stacked::None,
            chart_type: "line",
            format_functions: &[],
            options: ValueAxisOptions::default(),
        }
    }

    #[test]
    fn value_axis_scale_covers_raw_extent_with_nice_boundaries() {
        let values = vec![vec![10.0, 20.0, 30.0]];
        let axis = make_value_axis_data(input(&values, 300.0)).expect("axis data");

        assert!(axis.scale.min <= 10.0);
        assert!(axis.scale.max >= 30.0);
        assert!(axis.tick_count >= 2);
        assert_eq!(axis.valid_tick_count, axis.tick_count);
        assert_eq!(axis.labels.len(), axis.tick_count);
    }

    #[test]
    fn value_axis_fails_on_empty_values() {
        let values: Vec<Vec<f64>> = vec![Vec::new()];
        let err = make_value_axis_data(input(&values, 300.0)).expect_err("must fail");
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn value_axis_fails_on_non_positive_dimension() {
        let values = vec![vec![1.0, 2.0]];
        let err = make_value_axis_data(input(&values, 0.0)).expect_err("must fail");
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn stacked_extent_uses_category_sums() {
        let values = vec![vec![10.0, 20.0], vec![30.0, 40.0]];

        let mut stacked_input = input(&values, 300.0);
        stacked_input.stacked = Stacked::Normal;
        let stacked = make_value_axis_data(stacked_input).expect("stacked axis");

        // Category sums are 40 and 60, so the stacked maximum covers 60.
        assert!(stacked.scale.max >= 60.0);

        let plain = make_value_axis_data(input(&values, 300.0)).expect("plain axis");
        assert!(plain.scale.max >= 40.0);
        assert!(plain.scale.max < 60.0);
    }

    #[test]
    fn axis_options_widen_the_raw_extent() {
        let values = vec![vec![10.0, 20.0]];
        let mut with_options = input(&values, 300.0);
        with_options.options = ValueAxisOptions {
            min: Some(0.0),
            max: Some(100.0),
        };
        let axis = make_value_axis_data(with_options).expect("axis data");

        assert!(axis.scale.min <= 0.0);
        assert!(axis.scale.max >= 100.0);
    }

    #[test]
    fn label_axis_counts_match_label_length() {
        let labels = vec!["Jan".to_owned(), "Feb".to_owned(), "Mar".to_owned()];
        let axis = make_label_axis_data(&labels).expect("label axis");

        assert_eq!(axis.tick_count, 3);
        assert_eq!(axis.valid_tick_count, 3);
        assert_eq!(axis.labels, labels);
    }

    #[test]
    fn label_axis_fails_on_empty_labels() {
        let err = make_label_axis_data(&[]).expect_err("must fail");
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn nice_step_picks_from_one_two_five_family() {
        assert_eq!(nice_step(7.3), 10.0);
        assert_eq!(nice_step(1.2), 2.0);
        assert_eq!(nice_step(28.0), 50.0);
        assert_eq!(nice_step(0.03), 0.05);
    }

    #[test]
    fn nice_scale_widens_degenerate_extent() {
        let (scale, _, tick_count) = nice_scale(5.0, 5.0, 5);
        assert!(scale.min < 5.0);
        assert!(scale.max > 5.0);
        assert!(tick_count >= 2);

        let (zero_scale, _, _) = nice_scale(0.0, 0.0, 5);
        assert!(zero_scale.max > zero_scale.min);
    }

    #[test]
    fn nice_scale_may_exceed_the_tick_target_after_snapping() {
        // Step 10 already fits the target, so snapping 0.5..110.5 outward
        // to 0..120 adds a tick past the target count.
        let (scale, step, tick_count) = nice_scale(0.5, 110.5, 12);
        assert_eq!(step, 10.0);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 120.0);
        assert_eq!(tick_count, 13);
    }

    #[test]
    fn tick_target_count_scales_with_pixels_and_clamps() {
        assert_eq!(axis_tick_target_count(90.0, 45.0, 2, 12), 3);
        assert_eq!(axis_tick_target_count(10.0, 45.0, 2, 12), 2);
        assert_eq!(axis_tick_target_count(10_000.0, 45.0, 2, 12), 12);
        assert_eq!(axis_tick_target_count(-5.0, 45.0, 2, 12), 2);
    }

    #[test]
    fn format_pipeline_applies_steps_in_order() {
        let pipeline = vec![
            LabelFormat::Precision { digits: 2 },
            LabelFormat::ThousandsComma,
            LabelFormat::Prefix {
                text: "$".to_owned(),
            },
        ];
        assert_eq!(format_label(1234.5, &pipeline), "$1,234.50");
        assert_eq!(format_label(-1234567.0, &pipeline), "$-1,234,567.00");
    }

    #[test]
    fn empty_format_pipeline_renders_canonical_numbers() {
        assert_eq!(format_label(200.0, &[]), "200");
        assert_eq!(format_label(0.5, &[]), "0.5");
    }
}
