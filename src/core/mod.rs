pub mod scale_calc;
pub mod series_model;
pub mod types;

pub use scale_calc::{
    LabelAxisData, LabelFormat, Stacked, ValueAxisData, ValueAxisInput, ValueAxisOptions,
    format_label, make_label_axis_data, make_value_axis_data,
};
pub use series_model::{SeriesData, SeriesModel};
pub use types::{Bounds, Dimension, LastItemStyle, Scale, SeriesValues, pivot};
