use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::table_query::predicate::{Literal, RowSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product columns addressable from the products table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductColumn {
    Name,
    Sku,
    Price,
    CreatedAt,
    UpdatedAt,
}

impl RowSource<ProductColumn> for Product {
    fn value(&self, column: &ProductColumn) -> Option<Literal> {
        match column {
            ProductColumn::Name => Some(Literal::from(self.name.as_str())),
            ProductColumn::Sku => Some(Literal::from(self.sku.as_str())),
            ProductColumn::Price => self.price.to_f64().map(Literal::Number),
            ProductColumn::CreatedAt => Some(Literal::Timestamp(self.created_at)),
            ProductColumn::UpdatedAt => Some(Literal::Timestamp(self.updated_at)),
        }
    }
}
