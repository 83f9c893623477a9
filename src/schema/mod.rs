mod coerce;
mod frame;
mod types;

pub use frame::{COLUMN_RENAMES, DataFrame, create_dataframe};
pub use types::{FEATURE_NAMES, PredictionRequest};
