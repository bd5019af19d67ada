use crate::domain::{
    product::entities::ProductColumn,
    table_query::entities::{ColumnKind, TableQueryConfig},
};

pub fn product_table_config() -> TableQueryConfig<ProductColumn> {
    TableQueryConfig::new()
        .sortable("price", ProductColumn::Price)
        .sortable("createdAt", ProductColumn::CreatedAt)
        .sortable("updatedAt", ProductColumn::UpdatedAt)
        .filterable_as("name", ProductColumn::Name, ColumnKind::Text)
        .filterable_as("sku", ProductColumn::Sku, ColumnKind::Text)
        .filterable_as("price", ProductColumn::Price, ColumnKind::Range)
        .filterable_as("createdAt", ProductColumn::CreatedAt, ColumnKind::Date)
        .filterable_as("updatedAt", ProductColumn::UpdatedAt, ColumnKind::Date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProductInput {
    pub product_id: i32,
}
