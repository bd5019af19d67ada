use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Option of a category picker: the id rendered as text and the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
