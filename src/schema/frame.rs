use super::types::PredictionRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request field name to model feature name. Every entry is currently an
/// identity pair; names must match the trained model exactly.
pub const COLUMN_RENAMES: [(&str, &str); 11] = [
    ("CreditScore", "CreditScore"),
    ("Age", "Age"),
    ("Tenure", "Tenure"),
    ("Balance", "Balance"),
    ("NumOfProducts", "NumOfProducts"),
    ("HasCrCard", "HasCrCard"),
    ("IsActiveMember", "IsActiveMember"),
    ("EstimatedSalary", "EstimatedSalary"),
    ("Surname", "Surname"),
    ("Geography", "Geography"),
    ("Gender", "Gender"),
];

/// Column-oriented table in the `split` layout scoring servers accept:
/// one list of column names and one list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    pub columns: Vec<String>,
    pub data: Vec<Vec<Value>>,
}

impl DataFrame {
    pub fn num_rows(&self) -> usize {
        self.data.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Value of `column` in row `row`, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.data.get(row)?.get(index)
    }

    /// Renames columns found in `renames`; columns without an entry keep
    /// their name.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for column in &mut self.columns {
            if let Some((_, to)) = renames.iter().find(|(from, _)| *from == column.as_str()) {
                *column = (*to).to_string();
            }
        }
    }
}

/// Builds the single-row frame the model scores.
pub fn create_dataframe(request: &PredictionRequest) -> DataFrame {
    let (columns, row): (Vec<String>, Vec<Value>) = request
        .named_values()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .unzip();

    let mut frame = DataFrame {
        columns,
        data: vec![row],
    };
    frame.rename_columns(&COLUMN_RENAMES);
    frame
}
