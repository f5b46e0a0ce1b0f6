use serde::{Deserialize, Serialize};

use crate::core::{Bounds, LabelFormat, LastItemStyle, SeriesValues, Stacked, ValueAxisOptions};
use crate::error::{ChartError, ChartResult};

/// Raw user-facing chart input before layout and normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartInput {
    /// Category names, one per column of `values`.
    pub labels: Vec<String>,
    /// Legend entries, one per series.
    pub series_names: Vec<String>,
    /// Series-major raw values.
    pub values: SeriesValues,
}

/// Plot-grid tick counts supplied by the caller.
///
/// When absent, the composer falls back to the freshly computed
/// `valid_tick_count` of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotData {
    pub v_tick_count: usize,
    pub h_tick_count: usize,
}

/// Normalized chart data produced by the layout step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConvertData {
    pub values: SeriesValues,
    pub formatted_values: Vec<Vec<String>>,
    pub labels: Vec<String>,
    pub series_names: Vec<String>,
    pub format_functions: Vec<LabelFormat>,
    #[serde(default)]
    pub plot_data: Option<PlotData>,
}

/// Output of the layout/normalization collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseData {
    pub convert_data: ConvertData,
    pub bounds: Bounds,
}

/// External layout/normalization step.
///
/// Implementations translate raw user input into normalized values plus the
/// pixel bounds available to the series plot. The composer only ever reads
/// the result.
pub trait BaseLayout {
    fn base_data(
        &self,
        input: &ChartInput,
        theme: &Theme,
        options: &ChartOptions,
    ) -> ChartResult<BaseData>;
}

/// Minimal layout collaborator: fixed plot bounds, labels passed through,
/// values formatted with the options' format pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleLayout {
    pub bounds: Bounds,
}

impl SimpleLayout {
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl BaseLayout for SimpleLayout {
    fn base_data(
        &self,
        input: &ChartInput,
        _theme: &Theme,
        options: &ChartOptions,
    ) -> ChartResult<BaseData> {
        if input.values.iter().all(Vec::is_empty) {
            return Err(ChartError::Configuration(
                "chart input requires at least one series value".to_owned(),
            ));
        }

        let formatted_values = input
            .values
            .iter()
            .map(|series| {
                series
                    .iter()
                    .map(|value| crate::core::format_label(*value, &options.format_functions))
                    .collect()
            })
            .collect();

        Ok(BaseData {
            convert_data: ConvertData {
                values: input.values.clone(),
                formatted_values,
                labels: input.labels.clone(),
                series_names: input.series_names.clone(),
                format_functions: options.format_functions.clone(),
                plot_data: None,
            },
            bounds: self.bounds,
        })
    }
}

/// Per-series style inputs resolved by an external theme step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Theme {
    pub series_colors: Vec<String>,
    #[serde(default)]
    pub last_item_styles: Vec<LastItemStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeriesOptions {
    #[serde(default)]
    pub stacked: Stacked,
}

/// Recognized chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_chart_type")]
    pub chart_type: String,
    /// Rendering backend hint forwarded to the series component untouched.
    #[serde(default)]
    pub lib_type: Option<String>,
    #[serde(default)]
    pub series: SeriesOptions,
    #[serde(default)]
    pub value_axis: ValueAxisOptions,
    #[serde(default)]
    pub tooltip_prefix: Option<String>,
    #[serde(default)]
    pub format_functions: Vec<LabelFormat>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: default_chart_type(),
            lib_type: None,
            series: SeriesOptions::default(),
            value_axis: ValueAxisOptions::default(),
            tooltip_prefix: None,
            format_functions: Vec::new(),
        }
    }
}

fn default_chart_type() -> String {
    "line".to_owned()
}
