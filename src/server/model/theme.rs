//! Theme domain models and parameters.

use crate::model::theme::{CreateThemeDto, ThemeDto};

/// A bookable room escape theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: i32,
    /// Unique display name.
    pub name: String,
    pub description: String,
    /// URL of the thumbnail image.
    pub thumbnail: String,
}

impl Theme {
    pub fn into_dto(self) -> ThemeDto {
        ThemeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
        }
    }

    pub fn from_entity(entity: entity::theme::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            thumbnail: entity.thumbnail,
        }
    }
}

/// Parameters for creating a theme.
#[derive(Debug, Clone)]
pub struct CreateThemeParam {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl CreateThemeParam {
    pub fn from_dto(dto: CreateThemeDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            thumbnail: dto.thumbnail,
        }
    }
}
