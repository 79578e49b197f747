//! Snapshot cleaning: raw listings table → modeling-ready table.

use crate::error::{PrepError, Result};
use crate::parse::{count_amenities, parse_bathrooms, parse_price};
use polars::prelude::*;

/// Columns the raw snapshot must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "price",
    "bathrooms_text",
    "bedrooms",
    "accommodates",
    "room_type",
    "property_type",
    "amenities",
    "review_scores_rating",
    "neighbourhood_cleansed",
];

/// Columns of the cleaned table, in output order.
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "bedrooms",
    "bathrooms",
    "accommodates",
    "room_type",
    "property_type_grouped",
    "amenities_count",
    "review_scores_rating",
    "neighbourhood_cleansed",
    "price",
];

/// Maximum bedroom count kept by the outlier filter.
const MAX_BEDROOMS: i64 = 10;
/// Maximum nightly price kept by the outlier filter.
const MAX_PRICE: f64 = 3000.0;

/// Configuration for the cleaning stage.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Property types rarer than this collapse into `"Other"` (default: 100).
    pub min_property_type_count: u32,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_property_type_count: 100,
        }
    }
}

/// Clean a raw listings snapshot into the nine-column modeling table.
///
/// Steps: parse `price` from its currency string, extract numeric
/// `bathrooms` from free text, count `amenities`, group rare property
/// types, drop outlier rows (`bedrooms > 10` or `price > 3000`), project to
/// the output columns and remove every row that still has a null.
///
/// A missing required column or an unparseable non-null price is a hard
/// error; missing bathroom text or ratings are data-quality gaps and only
/// remove the affected row.
///
/// The result is guaranteed null-free and to satisfy both outlier bounds.
pub fn clean_listings(raw: &DataFrame, config: &CleanConfig) -> Result<DataFrame> {
    for name in REQUIRED_COLUMNS {
        if raw.column(name).is_err() {
            return Err(PrepError::MissingColumn(name.to_string()));
        }
    }

    let mut df = raw.clone();
    df.with_column(price_column(raw.column("price")?)?)?;
    df.with_column(bathrooms_column(raw.column("bathrooms_text")?)?)?;
    df.with_column(amenities_count_column(raw.column("amenities")?)?)?;

    // Frequency of each property type over the entire snapshot, before any
    // row is dropped.
    let type_counts = df
        .clone()
        .lazy()
        .group_by([col("property_type")])
        .agg([len().alias("property_type_count")]);

    let cleaned = df
        .lazy()
        .join(
            type_counts,
            [col("property_type")],
            [col("property_type")],
            JoinArgs::new(JoinType::Left),
        )
        .with_column(
            when(col("property_type").is_null())
                .then(lit(NULL))
                .when(col("property_type_count").gt_eq(lit(config.min_property_type_count)))
                .then(col("property_type"))
                .otherwise(lit("Other"))
                .alias("property_type_grouped"),
        )
        .with_column(col("review_scores_rating").cast(DataType::Float64))
        .filter(
            col("bedrooms")
                .lt_eq(lit(MAX_BEDROOMS))
                .and(col("price").lt_eq(lit(MAX_PRICE))),
        )
        .select(OUTPUT_COLUMNS.map(col))
        .drop_nulls(None)
        .collect()?;

    Ok(cleaned)
}

/// Parse the currency-formatted price column.
///
/// A null stays null and falls to the final drop; a non-null value that
/// cannot be parsed aborts the whole operation.
fn price_column(raw: &Column) -> Result<Column> {
    if raw.dtype() != &DataType::String {
        // Sources that pre-parse prices are fine too.
        return Ok(raw.cast(&DataType::Float64)?);
    }
    let values = raw.str()?;
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        match value {
            None => parsed.push(None),
            Some(text) => match parse_price(text) {
                Some(price) => parsed.push(Some(price)),
                None => return Err(PrepError::UnparseablePrice(text.to_string())),
            },
        }
    }
    Ok(Float64Chunked::from_iter_options("price".into(), parsed.into_iter())
        .into_series()
        .into())
}

/// Extract numeric bathrooms from the free-text description.
fn bathrooms_column(raw: &Column) -> Result<Column> {
    let values = raw.str()?;
    let parsed = values.into_iter().map(|v| v.and_then(parse_bathrooms));
    Ok(Float64Chunked::from_iter_options("bathrooms".into(), parsed)
        .into_series()
        .into())
}

/// Count amenity tokens; a null list counts zero.
fn amenities_count_column(raw: &Column) -> Result<Column> {
    let values = raw.str()?;
    let counts: Vec<u32> = values.into_iter().map(count_amenities).collect();
    Ok(UInt32Chunked::from_vec("amenities_count".into(), counts)
        .into_series()
        .into())
}
