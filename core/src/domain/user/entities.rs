use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::table_query::predicate::{Literal, RowSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserColumn {
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl RowSource<UserColumn> for User {
    fn value(&self, column: &UserColumn) -> Option<Literal> {
        Some(match column {
            UserColumn::Id => Literal::from(self.id.as_str()),
            UserColumn::Name => Literal::from(self.name.as_str()),
            UserColumn::CreatedAt => Literal::Timestamp(self.created_at),
            UserColumn::UpdatedAt => Literal::Timestamp(self.updated_at),
        })
    }
}
