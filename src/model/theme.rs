use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateThemeDto {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemesDto {
    pub themes: Vec<ThemeDto>,
}
