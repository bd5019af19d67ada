use crate::domain::{
    table_query::entities::{ColumnKind, TableQueryConfig},
    user::entities::UserColumn,
};

pub fn user_table_config() -> TableQueryConfig<UserColumn> {
    TableQueryConfig::new()
        .sortable("createdAt", UserColumn::CreatedAt)
        .sortable("updatedAt", UserColumn::UpdatedAt)
        .filterable("id", UserColumn::Id)
        .filterable("name", UserColumn::Name)
        .filterable_as("createdAt", UserColumn::CreatedAt, ColumnKind::Date)
}
