use crate::{
    domain::user::entities::{User, UserColumn},
    entity::user,
};

impl From<&user::Model> for User {
    fn from(model: &user::Model) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            email: model.email.clone(),
            email_verified: model.email_verified,
            image: model.image.clone(),
            role: model.role.clone(),
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}

impl From<UserColumn> for user::Column {
    fn from(column: UserColumn) -> Self {
        match column {
            UserColumn::Id => user::Column::Id,
            UserColumn::Name => user::Column::Name,
            UserColumn::CreatedAt => user::Column::CreatedAt,
            UserColumn::UpdatedAt => user::Column::UpdatedAt,
        }
    }
}
