use serde::{Deserialize, Serialize};

use crate::core::types::{LastItemStyle, Scale, SeriesValues};
use crate::error::{ChartError, ChartResult};

/// Construction input for [`SeriesModel`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesData {
    pub values: SeriesValues,
    pub scale: Option<Scale>,
    pub colors: Vec<String>,
    pub last_item_styles: Vec<LastItemStyle>,
}

/// Owns one chart's raw series values and their scale-normalized form.
///
/// Percent values are derived once at construction and stay immutable;
/// pixel values are derived on demand from whatever size the caller passes
/// and are never cached, so a resize just asks again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesModel {
    markers: SeriesValues,
    percent_values: SeriesValues,
    tick_scale: Scale,
    colors: Vec<String>,
    last_item_styles: Vec<LastItemStyle>,
}

impl SeriesModel {
    /// Builds the model, normalizing every value against the scale.
    ///
    /// Normalization subtracts the scale minimum and divides by the scale
    /// maximum. A zero maximum flows through as non-finite percents instead
    /// of an error, and so do any non-finite inputs.
    pub fn new(data: SeriesData) -> ChartResult<Self> {
        if data.values.iter().all(Vec::is_empty) {
            return Err(ChartError::InvalidSeriesData(
                "series values must not be empty".to_owned(),
            ));
        }
        let Some(scale) = data.scale else {
            return Err(ChartError::InvalidSeriesData(
                "series scale is required".to_owned(),
            ));
        };

        let percent_values = convert_values(&data.values, |value| (value - scale.min) / scale.max);

        Ok(Self {
            markers: data.values,
            percent_values,
            tick_scale: scale,
            colors: data.colors,
            last_item_styles: data.last_item_styles,
        })
    }

    #[must_use]
    pub fn markers(&self) -> &SeriesValues {
        &self.markers
    }

    #[must_use]
    pub fn percent_values(&self) -> &SeriesValues {
        &self.percent_values
    }

    #[must_use]
    pub fn tick_scale(&self) -> Scale {
        self.tick_scale
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Projects the stored percent values into a concrete pixel length.
    ///
    /// Pure and repeatable: calling this with different sizes never touches
    /// the stored percent values.
    #[must_use]
    pub fn pixel_values(&self, size: f64) -> SeriesValues {
        convert_values(&self.percent_values, |value| value * size)
    }

    /// Extracts the `color` field from every last-item style, in order.
    ///
    /// Only the first style's color presence is checked; when it is absent
    /// (or there are no styles at all) the result is empty. Later styles
    /// without a color yield an empty string.
    #[must_use]
    pub fn pick_last_colors(&self) -> Vec<String> {
        let has_lead_color = self
            .last_item_styles
            .first()
            .is_some_and(|style| style.color.is_some());
        if !has_lead_color {
            return Vec::new();
        }

        self.last_item_styles
            .iter()
            .map(|style| style.color.clone().unwrap_or_default())
            .collect()
    }
}

fn convert_values(values: &[Vec<f64>], convert: impl Fn(f64) -> f64) -> SeriesValues {
    values
        .iter()
        .map(|series| series.iter().copied().map(&convert).collect())
        .collect()
}
