pub mod chart_data;
pub mod components;
pub mod composer;
pub mod definition;

pub use chart_data::{
    BaseData, BaseLayout, ChartInput, ChartOptions, ConvertData, PlotData, SeriesOptions,
    SimpleLayout, Theme,
};
pub use components::{
    Component, ComponentRegistry, LABEL_AXIS_COMPONENT, LabelAxisComponent, LEGEND_COMPONENT,
    LegendComponent, PLOT_COMPONENT, PlotComponent, SERIES_COMPONENT, SeriesComponent,
    TOOLTIP_COMPONENT, TooltipComponent, VALUE_AXIS_COMPONENT, ValueAxisComponent,
};
pub use composer::{AxesData, AxisSource, LineChart};
pub use definition::{ChartDefinition, SeriesDefinition};
