use crate::{
    domain::product::entities::{Product, ProductColumn},
    entity::product,
};

impl From<&product::Model> for Product {
    fn from(model: &product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            sku: model.sku.clone(),
            price: model.price,
            published: model.published,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}

impl From<product::Model> for Product {
    fn from(model: product::Model) -> Self {
        Self::from(&model)
    }
}

impl From<ProductColumn> for product::Column {
    fn from(column: ProductColumn) -> Self {
        match column {
            ProductColumn::Name => product::Column::Name,
            ProductColumn::Sku => product::Column::Sku,
            ProductColumn::Price => product::Column::Price,
            ProductColumn::CreatedAt => product::Column::CreatedAt,
            ProductColumn::UpdatedAt => product::Column::UpdatedAt,
        }
    }
}
