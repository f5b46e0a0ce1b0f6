use serde::{Deserialize, Serialize};

/// Series-major chart values: one inner vector per series, one element per
/// category. Supplied once and never mutated afterwards.
pub type SeriesValues = Vec<Vec<f64>>;

/// Numeric range represented by a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Pixel extent of a layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel area allocated to the series plot by the external layout step.
/// Consumed read-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub dimension: Dimension,
}

impl Bounds {
    #[must_use]
    pub const fn new(dimension: Dimension) -> Self {
        Self { dimension }
    }
}

/// Per-series style record for the marker drawn at the last point of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LastItemStyle {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
}

/// Transposes series-major rows into category-major rows.
///
/// Rendering components expect one entry per category containing every
/// series' value for that category. On rectangular input, applying `pivot`
/// twice returns the original data.
#[must_use]
pub fn pivot<T: Clone>(values: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = values.first() else {
        return Vec::new();
    };

    let mut pivoted: Vec<Vec<T>> = (0..first.len())
        .map(|_| Vec::with_capacity(values.len()))
        .collect();
    for row in values {
        for (index, value) in row.iter().enumerate() {
            if let Some(column) = pivoted.get_mut(index) {
                column.push(value.clone());
            }
        }
    }

    pivoted
}
