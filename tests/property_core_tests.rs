use approx::assert_relative_eq;
use linechart::core::{pivot, Scale, SeriesData, SeriesModel};
use proptest::prelude::*;

fn series_values() -> impl Strategy<Value = Vec<Vec<f64>>> {
    proptest::collection::vec(
        proptest::collection::vec(-10_000.0f64..10_000.0, 1..16),
        1..8,
    )
}

proptest! {
    #[test]
    fn percent_values_match_the_documented_formula(
        values in series_values(),
        min in -1_000.0f64..1_000.0,
        max in 1.0f64..10_000.0,
    ) {
        let scale = Scale::new(min, max);
        let model = SeriesModel::new(SeriesData {
            values: values.clone(),
            scale: Some(scale),
            ..SeriesData::default()
        })
        .expect("series model");

        for (series_index, series) in values.iter().enumerate() {
            for (category_index, value) in series.iter().enumerate() {
                let expected = (value - scale.min) / scale.max;
                let actual = model.percent_values()[series_index][category_index];
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn pixel_values_are_linear_in_size_and_never_mutate_percents(
        values in series_values(),
        size in 0.0f64..5_000.0,
    ) {
        let model = SeriesModel::new(SeriesData {
            values,
            scale: Some(Scale::new(0.0, 10_000.0)),
            ..SeriesData::default()
        })
        .expect("series model");

        let before = model.percent_values().clone();
        let pixels = model.pixel_values(size);
        let doubled = model.pixel_values(size * 2.0);

        for (series_index, series) in before.iter().enumerate() {
            for (category_index, percent) in series.iter().enumerate() {
                prop_assert_eq!(
                    pixels[series_index][category_index],
                    percent * size
                );
                assert_relative_eq!(
                    doubled[series_index][category_index],
                    pixels[series_index][category_index] * 2.0,
                    max_relative = 1e-12
                );
            }
        }
        prop_assert_eq!(model.percent_values(), &before);
    }

    #[test]
    fn pivot_is_its_own_inverse_on_rectangular_data(
        rows in 1usize..8,
        columns in 1usize..8,
        seed in -1_000.0f64..1_000.0,
    ) {
        let values: Vec<Vec<f64>> = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| seed + (row * columns + column) as f64)
                    .collect()
            })
            .collect();

        prop_assert_eq!(pivot(&pivot(&values)), values);
    }
}
