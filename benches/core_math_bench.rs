use criterion::{Criterion, criterion_group, criterion_main};
use linechart::core::{
    Scale, SeriesData, SeriesModel, Stacked, ValueAxisInput, ValueAxisOptions,
    make_value_axis_data,
};
use std::hint::black_box;

fn wide_values(series: usize, categories: usize) -> Vec<Vec<f64>> {
    (0..series)
        .map(|series_index| {
            (0..categories)
                .map(|category_index| {
                    100.0 + (series_index * categories + category_index) as f64 * 0.37
                })
                .collect()
        })
        .collect()
}

fn bench_value_axis_data_8x1k(c: &mut Criterion) {
    let values = wide_values(8, 1_000);

    c.bench_function("value_axis_data_8x1k", |b| {
        b.iter(|| {
            let axis = make_value_axis_data(ValueAxisInput {
                values: black_box(&values),
                series_dimension: black_box(540.0),
                stacked: Stacked::None,
                chart_type: "line",
                format_functions: &[],
                options: ValueAxisOptions::default(),
            })
            .expect("axis data");
            black_box(axis.tick_count);
        })
    });
}

fn bench_percent_derivation_8x1k(c: &mut Criterion) {
    let values = wide_values(8, 1_000);
    let scale = Scale::new(0.0, 5_000.0);

    c.bench_function("percent_derivation_8x1k", |b| {
        b.iter(|| {
            let model = SeriesModel::new(SeriesData {
                values: black_box(values.clone()),
                scale: Some(scale),
                ..SeriesData::default()
            })
            .expect("series model");
            black_box(model.percent_values().len());
        })
    });
}

fn bench_pixel_projection_8x1k(c: &mut Criterion) {
    let model = SeriesModel::new(SeriesData {
        values: wide_values(8, 1_000),
        scale: Some(Scale::new(0.0, 5_000.0)),
        ..SeriesData::default()
    })
    .expect("series model");

    c.bench_function("pixel_projection_8x1k", |b| {
        b.iter(|| {
            let pixels = model.pixel_values(black_box(540.0));
            black_box(pixels.len());
        })
    });
}

criterion_group!(
    benches,
    bench_value_axis_data_8x1k,
    bench_percent_derivation_8x1k,
    bench_pixel_projection_8x1k
);
criterion_main!(benches);
