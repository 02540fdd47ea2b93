//! Common transport-layer types shared between the CLI and the frontend.
//! These structs mirror the query and forecast backends' request/response
//! payloads so both clients deserialize responses without duplicating shapes.

pub mod api;
mod chart_kind;
mod error;
mod forecast;
mod row;
mod selection;

pub use api::{
    BackendErrorBody, ChartQueryRequest, ChartQueryResponse, ForecastRequest, ForecastResponse,
    decode_response,
};
pub use chart_kind::{ChartKind, ParseChartKindError};
pub use error::RequestError;
pub use forecast::{
    DEFAULT_DURATION, DEFAULT_METRIC, DEFAULT_PRODUCT, DURATIONS, ForecastHorizon, ForecastPoint,
    HorizonUnit, METRICS, PRODUCTS, ParseHorizonError,
};
pub use row::{Dataset, FieldValue, MISSING_LABEL, Row};
pub use selection::{FieldSelection, SelectionError};
