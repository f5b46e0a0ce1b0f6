use serde::{Deserialize, Serialize};

use crate::api::components::{
    Component, LEGEND_COMPONENT, LegendComponent, PLOT_COMPONENT, PlotComponent,
    TOOLTIP_COMPONENT, TooltipComponent,
};
use crate::api::composer::{AxesData, LineChart};
use crate::core::{Bounds, Scale, SeriesValues};

/// Series geometry handed to a drawing backend: normalized and
/// pixel-positioned values plus the styling extracted for end-of-line
/// markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub scale: Scale,
    pub percent_values: SeriesValues,
    pub pixel_values: SeriesValues,
    pub colors: Vec<String>,
    pub last_colors: Vec<String>,
}

/// Serializable snapshot of one composed chart.
///
/// This is the boundary contract: everything a backend needs to paint, with
/// no references back into the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub chart_type: String,
    pub bounds: Bounds,
    pub axes: AxesData,
    pub plot: Option<PlotComponent>,
    pub legend: Option<LegendComponent>,
    pub tooltip: Option<TooltipComponent>,
    pub series: Option<SeriesDefinition>,
}

impl ChartDefinition {
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl LineChart {
    /// Snapshots the composed chart into its renderable definition.
    ///
    /// Pixel values are projected against the current bounds' height, the
    /// pixel length of the value axis.
    #[must_use]
    pub fn definition(&self) -> ChartDefinition {
        let registry = self.components();

        let plot = match registry.get(PLOT_COMPONENT) {
            Some(Component::Plot(plot)) => Some(*plot),
            _ => None,
        };
        let legend = match registry.get(LEGEND_COMPONENT) {
            Some(Component::Legend(legend)) => Some(legend.clone()),
            _ => None,
        };
        let tooltip = match registry.get(TOOLTIP_COMPONENT) {
            Some(Component::Tooltip(tooltip)) => Some(tooltip.clone()),
            _ => None,
        };
        let series = registry.series().map(|series| {
            let model = &series.model;
            SeriesDefinition {
                scale: model.tick_scale(),
                percent_values: model.percent_values().clone(),
                pixel_values: model.pixel_values(self.bounds().dimension.height),
                colors: model.colors().to_vec(),
                last_colors: model.pick_last_colors(),
            }
        });

        ChartDefinition {
            chart_type: registry
                .series()
                .map(|series| series.chart_type.clone())
                .unwrap_or_else(|| "line".to_owned()),
            bounds: self.bounds(),
            axes: self.axes().clone(),
            plot,
            legend,
            tooltip,
            series,
        }
    }
}
