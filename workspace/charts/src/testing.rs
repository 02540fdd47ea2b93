//! Shared fixtures for the unit tests in this crate.

use common::{
    ChartQueryResponse, Dataset, FieldSelection, ForecastPoint, ForecastResponse, Row,
};

use crate::palette::Palette;

pub fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn selection(category: &str, values: &[&str]) -> FieldSelection {
    FieldSelection::new(category, fields(values)).expect("valid test selection")
}

/// Three-color palette with easy to read values.
pub fn test_palette() -> Palette {
    Palette::new(["#000001", "#000002", "#000003"]).expect("valid test palette")
}

pub fn profit_by_country() -> Dataset {
    Dataset::new(vec![
        Row::new().with("name", "Canada").with("profit", 120).with("sales", 400),
        Row::new().with("name", "France").with("profit", 95).with("sales", 310),
        Row::new().with("name", "Germany").with("profit", 150).with("sales", 520),
    ])
}

/// Rows of the "Total profit by country in 2014" example.
pub fn scenario_rows() -> Dataset {
    Dataset::new(vec![
        Row::new().with("name", "Canada").with("profit", 120),
        Row::new().with("name", "France").with("profit", 95),
    ])
}

pub fn chart_response(y_fields: &[&str]) -> ChartQueryResponse {
    ChartQueryResponse {
        data: scenario_rows(),
        x_field: "name".to_string(),
        y_fields: fields(y_fields),
        query: None,
    }
}

pub fn forecast_response(points: &[(&str, f64)], insight: &str) -> ForecastResponse {
    ForecastResponse {
        forecast: points
            .iter()
            .map(|(period, value)| ForecastPoint::new(*period, *value))
            .collect(),
        insight: insight.to_string(),
        product: None,
        target_metric: None,
        duration: None,
    }
}
