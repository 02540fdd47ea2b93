pub mod chart;
pub mod forecast;

pub use chart::{ChartOutcome, chart};
pub use forecast::{ForecastOutcome, forecast};
