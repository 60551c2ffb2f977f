//! Theme factory for creating test theme entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test themes with customizable fields.
pub struct ThemeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    thumbnail: String,
}

impl<'a> ThemeFactory<'a> {
    /// Creates a new ThemeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Theme {id}"`
    /// - description: `"Description {id}"`
    /// - thumbnail: `"https://roomescape.test/{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Theme {}", id),
            description: format!("Description {}", id),
            thumbnail: format!("https://roomescape.test/{}.png", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Builds and inserts the theme entity into the database.
    pub async fn build(self) -> Result<entity::theme::Model, DbErr> {
        entity::theme::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            thumbnail: ActiveValue::Set(self.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a theme with default values.
pub async fn create_theme(db: &DatabaseConnection) -> Result<entity::theme::Model, DbErr> {
    ThemeFactory::new(db).build().await
}
