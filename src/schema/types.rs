use super::coerce::{lax_float, lax_int};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feature names, in the order the model was trained with.
pub const FEATURE_NAMES: [&str; 11] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Surname",
    "Geography",
    "Gender",
];

/// One customer record submitted for scoring.
///
/// Every field is optional on the wire; omitted fields take the defaults
/// below. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PredictionRequest {
    #[serde(deserialize_with = "lax_int")]
    pub credit_score: i64,
    #[serde(deserialize_with = "lax_float")]
    pub age: f64,
    #[serde(deserialize_with = "lax_int")]
    pub tenure: i64,
    #[serde(deserialize_with = "lax_float")]
    pub balance: f64,
    #[serde(deserialize_with = "lax_int")]
    pub num_of_products: i64,
    #[serde(deserialize_with = "lax_float")]
    pub has_cr_card: f64,
    #[serde(deserialize_with = "lax_float")]
    pub is_active_member: f64,
    #[serde(deserialize_with = "lax_float")]
    pub estimated_salary: f64,
    pub surname: String,
    pub geography: String,
    pub gender: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            credit_score: 586,
            age: 23.0,
            tenure: 2,
            balance: 0.0,
            num_of_products: 2,
            has_cr_card: 0.0,
            is_active_member: 1.0,
            estimated_salary: 160976.75,
            surname: "Lucchese".to_string(),
            geography: "France".to_string(),
            gender: "Female".to_string(),
        }
    }
}

impl PredictionRequest {
    /// Field values paired with their feature names, in `FEATURE_NAMES` order.
    pub fn named_values(&self) -> [(&'static str, Value); 11] {
        [
            (FEATURE_NAMES[0], Value::from(self.credit_score)),
            (FEATURE_NAMES[1], Value::from(self.age)),
            (FEATURE_NAMES[2], Value::from(self.tenure)),
            (FEATURE_NAMES[3], Value::from(self.balance)),
            (FEATURE_NAMES[4], Value::from(self.num_of_products)),
            (FEATURE_NAMES[5], Value::from(self.has_cr_card)),
            (FEATURE_NAMES[6], Value::from(self.is_active_member)),
            (FEATURE_NAMES[7], Value::from(self.estimated_salary)),
            (FEATURE_NAMES[8], Value::from(self.surname.clone())),
            (FEATURE_NAMES[9], Value::from(self.geography.clone())),
            (FEATURE_NAMES[10], Value::from(self.gender.clone())),
        ]
    }
}
