//! Tabular aggregates backing the presentation charts.

use polars::prelude::*;

/// Mean nightly price per neighbourhood, sorted descending.
///
/// This is the table behind the "average price by neighborhood" chart; the
/// rendering itself lives outside this crate.
pub fn average_price_by_neighbourhood(clean: &DataFrame) -> PolarsResult<DataFrame> {
    clean
        .clone()
        .lazy()
        .group_by([col("neighbourhood_cleansed")])
        .agg([col("price").mean().alias("avg_price")])
        .sort(
            ["avg_price"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()
}
