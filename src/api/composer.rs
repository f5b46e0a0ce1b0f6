use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::chart_data::{BaseData, BaseLayout, ChartInput, ChartOptions, ConvertData, Theme};
use crate::api::components::{
    Component, ComponentRegistry, LABEL_AXIS_COMPONENT, LabelAxisComponent, LEGEND_COMPONENT,
    LegendComponent, PLOT_COMPONENT, PlotComponent, SERIES_COMPONENT, SeriesComponent,
    TOOLTIP_COMPONENT, TooltipComponent, VALUE_AXIS_COMPONENT, ValueAxisComponent,
};
use crate::core::{
    Bounds, LabelAxisData, SeriesData, SeriesModel, ValueAxisData, ValueAxisInput,
    make_label_axis_data, make_value_axis_data, pivot,
};
use crate::error::ChartResult;
use crate::interaction::{DotEvent, EventBridge};

/// Value-axis and label-axis data assembled for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesData {
    pub value_axis: ValueAxisData,
    pub label_axis: LabelAxisData,
}

/// Where the composer gets its axis data from.
///
/// `Cached` reuses previously assembled axis data verbatim with no
/// recomputation; that is the redraw path, where a caller rebuilds the chart
/// with new bounds but identical axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisSource {
    Compute,
    Cached(AxesData),
}

/// Line chart composer: assembles axis data, series geometry, and the
/// component registry a rendering backend walks.
///
/// A chart is either mid-construction or ready; there is no update state.
/// Resizing means constructing again, usually with [`AxisSource::Cached`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    registry: ComponentRegistry,
    axes: AxesData,
    bounds: Bounds,
    bridge: EventBridge,
}

impl LineChart {
    /// Composes a chart from already laid-out base data.
    pub fn new(
        base: BaseData,
        theme: &Theme,
        options: &ChartOptions,
        axis_source: AxisSource,
    ) -> ChartResult<Self> {
        let BaseData {
            convert_data,
            bounds,
        } = base;

        let axes = match axis_source {
            AxisSource::Cached(axes) => axes,
            AxisSource::Compute => Self::make_axes_data(&convert_data, bounds, options)?,
        };

        let mut registry = ComponentRegistry::new();
        Self::add_axis_components(&mut registry, &convert_data, &axes, theme, options);
        Self::add_series_component(&mut registry, &convert_data, &axes, theme, options)?;

        let bridge = EventBridge::connect(TOOLTIP_COMPONENT, SERIES_COMPONENT);

        debug!(
            chart_type = %options.chart_type,
            components = registry.len(),
            tick_count = axes.value_axis.valid_tick_count,
            "line chart assembled"
        );

        Ok(Self {
            registry,
            axes,
            bounds,
            bridge,
        })
    }

    /// Convenience entry point: runs the layout collaborator, then composes
    /// with freshly computed axes.
    pub fn from_input(
        input: &ChartInput,
        theme: &Theme,
        options: &ChartOptions,
        layout: &dyn BaseLayout,
    ) -> ChartResult<Self> {
        let base = layout.base_data(input, theme, options)?;
        Self::new(base, theme, options, AxisSource::Compute)
    }

    fn make_axes_data(
        convert_data: &ConvertData,
        bounds: Bounds,
        options: &ChartOptions,
    ) -> ChartResult<AxesData> {
        let value_axis = make_value_axis_data(ValueAxisInput {
            values: &convert_data.values,
            series_dimension: bounds.dimension.height,
            stacked: options.series.stacked,
            chart_type: &options.chart_type,
            format_functions: &convert_data.format_functions,
            options: options.value_axis,
        })?;
        let label_axis = make_label_axis_data(&convert_data.labels)?;

        Ok(AxesData {
            value_axis,
            label_axis,
        })
    }

    fn add_axis_components(
        registry: &mut ComponentRegistry,
        convert_data: &ConvertData,
        axes: &AxesData,
        theme: &Theme,
        options: &ChartOptions,
    ) {
        registry.register(
            VALUE_AXIS_COMPONENT,
            Component::ValueAxis(ValueAxisComponent {
                data: axes.value_axis.clone(),
            }),
        );
        registry.register(
            LABEL_AXIS_COMPONENT,
            Component::LabelAxis(LabelAxisComponent {
                data: axes.label_axis.clone(),
            }),
        );

        let plot = convert_data.plot_data.map_or(
            PlotComponent {
                v_tick_count: axes.value_axis.valid_tick_count,
                h_tick_count: axes.label_axis.valid_tick_count,
            },
            |plot_data| PlotComponent {
                v_tick_count: plot_data.v_tick_count,
                h_tick_count: plot_data.h_tick_count,
            },
        );
        registry.register(PLOT_COMPONENT, Component::Plot(plot));

        registry.register(
            LEGEND_COMPONENT,
            Component::Legend(LegendComponent {
                labels: convert_data.series_names.clone(),
                colors: theme.series_colors.clone(),
            }),
        );
        registry.register(
            TOOLTIP_COMPONENT,
            Component::Tooltip(TooltipComponent {
                prefix: options.tooltip_prefix.clone(),
                formatted_values: pivot(&convert_data.formatted_values),
                labels: convert_data.labels.clone(),
            }),
        );
    }

    fn add_series_component(
        registry: &mut ComponentRegistry,
        convert_data: &ConvertData,
        axes: &AxesData,
        theme: &Theme,
        options: &ChartOptions,
    ) -> ChartResult<()> {
        // The rendering component expects category-major entries, so both
        // raw and formatted values are pivoted before the model is built.
        let model = SeriesModel::new(SeriesData {
            values: pivot(&convert_data.values),
            scale: Some(axes.value_axis.scale),
            colors: theme.series_colors.clone(),
            last_item_styles: theme.last_item_styles.clone(),
        })?;

        registry.register(
            SERIES_COMPONENT,
            Component::Series(SeriesComponent::new(
                options.lib_type.clone(),
                options.chart_type.clone(),
                model,
                pivot(&convert_data.formatted_values),
            )),
        );

        Ok(())
    }

    #[must_use]
    pub fn components(&self) -> &ComponentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn axes(&self) -> &AxesData {
        &self.axes
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn series(&self) -> Option<&SeriesComponent> {
        self.registry.series()
    }

    /// Feeds one tooltip-origin dot event through the bridge into the
    /// series component.
    pub fn publish_dot_event(&mut self, event: DotEvent) {
        if let Some(series) = self.registry.series_mut() {
            self.bridge.dispatch(event, series);
        }
    }
}
