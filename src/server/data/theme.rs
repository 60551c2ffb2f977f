//! Theme data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::theme::{CreateThemeParam, Theme};

pub struct ThemeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ThemeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a theme.
    ///
    /// The name column is unique; a duplicate fails with a unique constraint violation.
    pub async fn create(&self, param: CreateThemeParam) -> Result<Theme, DbErr> {
        let entity = entity::theme::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            thumbnail: ActiveValue::Set(param.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Theme::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Theme>, DbErr> {
        let entity = entity::prelude::Theme::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Theme::from_entity))
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every theme ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Theme>, DbErr> {
        let entities = entity::prelude::Theme::find()
            .order_by_asc(entity::theme::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Gets the themes with the given ids, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Theme>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Deletes a theme, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Theme::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
