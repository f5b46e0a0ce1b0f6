use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LabelAxisData, SeriesModel, ValueAxisData};
use crate::interaction::DotEventListener;

pub const VALUE_AXIS_COMPONENT: &str = "yAxis";
pub const LABEL_AXIS_COMPONENT: &str = "xAxis";
pub const PLOT_COMPONENT: &str = "plot";
pub const LEGEND_COMPONENT: &str = "legend";
pub const TOOLTIP_COMPONENT: &str = "tooltip";
pub const SERIES_COMPONENT: &str = "series";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisComponent {
    pub data: ValueAxisData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAxisComponent {
    pub data: LabelAxisData,
}

/// Plot background grid: one tick count per axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotComponent {
    pub v_tick_count: usize,
    pub h_tick_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendComponent {
    pub labels: Vec<String>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipComponent {
    pub prefix: Option<String>,
    /// Category-major formatted values, one row per category.
    pub formatted_values: Vec<Vec<String>>,
    pub labels: Vec<String>,
}

/// Series geometry inputs plus the dot-highlight state driven by tooltip
/// events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesComponent {
    pub lib_type: Option<String>,
    pub chart_type: String,
    pub model: SeriesModel,
    /// Category-major formatted values matching the model's marker layout.
    pub formatted_values: Vec<Vec<String>>,
    highlighted: Option<(usize, usize)>,
}

impl SeriesComponent {
    #[must_use]
    pub fn new(
        lib_type: Option<String>,
        chart_type: String,
        model: SeriesModel,
        formatted_values: Vec<Vec<String>>,
    ) -> Self {
        Self {
            lib_type,
            chart_type,
            model,
            formatted_values,
            highlighted: None,
        }
    }

    /// Currently highlighted `(series_index, category_index)` dot, if any.
    #[must_use]
    pub fn highlighted_dot(&self) -> Option<(usize, usize)> {
        self.highlighted
    }
}

impl DotEventListener for SeriesComponent {
    fn on_show_dot(&mut self, series_index: usize, category_index: usize) {
        self.highlighted = Some((series_index, category_index));
    }

    fn on_hide_dot(&mut self, series_index: usize, category_index: usize) {
        if self.highlighted == Some((series_index, category_index)) {
            self.highlighted = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    ValueAxis(ValueAxisComponent),
    LabelAxis(LabelAxisComponent),
    Plot(PlotComponent),
    Legend(LegendComponent),
    Tooltip(TooltipComponent),
    Series(SeriesComponent),
}

/// Insertion-ordered component map keyed by name.
///
/// The order of registration is the order a backend walks when painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, Component>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, component: Component) {
        if self
            .components
            .insert(name.to_owned(), component)
            .is_some()
        {
            warn!(name, "replaced an already registered component");
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    #[must_use]
    pub fn series(&self) -> Option<&SeriesComponent> {
        match self.components.get(SERIES_COMPONENT) {
            Some(Component::Series(series)) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn series_mut(&mut self) -> Option<&mut SeriesComponent> {
        match self.components.get_mut(SERIES_COMPONENT) {
            Some(Component::Series(series)) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
