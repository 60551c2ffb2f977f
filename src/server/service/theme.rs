use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, theme::ThemeRepository},
    error::AppError,
    model::theme::{CreateThemeParam, Theme},
    util::{db::conflict_on_unique, validate::require_non_blank},
};

/// Number of themes returned by the weekly popularity endpoint.
pub const TOP_THEMES_LIMIT: usize = 10;

pub struct ThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a theme with a unique name.
    ///
    /// # Returns
    /// - `Ok(Theme)` - The created theme
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::Conflict)` - A theme with the same name exists
    pub async fn create(&self, param: CreateThemeParam) -> Result<Theme, AppError> {
        require_non_blank("name", &param.name)?;

        let repo = ThemeRepository::new(self.db);

        if repo.exists_by_name(&param.name).await? {
            return Err(AppError::Conflict(format!(
                "Theme '{}' already exists",
                param.name
            )));
        }

        let theme = repo
            .create(param)
            .await
            .map_err(|e| conflict_on_unique(e, "Theme name already exists"))?;

        tracing::info!("Created theme {} ({})", theme.id, theme.name);

        Ok(theme)
    }

    pub async fn get(&self, id: i32) -> Result<Theme, AppError> {
        ThemeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Theme {} not found", id)))
    }

    /// Gets every theme ordered by id.
    pub async fn list(&self) -> Result<Vec<Theme>, AppError> {
        Ok(ThemeRepository::new(self.db).get_all().await?)
    }

    /// Deletes a theme that no reservation references.
    ///
    /// # Returns
    /// - `Ok(())` - Theme deleted along with its waiting entries
    /// - `Err(AppError::NotFound)` - No theme with this id
    /// - `Err(AppError::Conflict)` - Reservations still reference the theme
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ThemeRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Theme {} not found", id)));
        }

        let reservations = ReservationRepository::new(self.db)
            .count_by_theme(id)
            .await?;
        if reservations > 0 {
            return Err(AppError::Conflict(format!(
                "Theme {} is referenced by {} reservation(s)",
                id, reservations
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets the `n` most reserved themes of the seven days before `reference_date`.
    ///
    /// The window is `[reference_date - 7 days, reference_date - 1 day]`. Themes
    /// without a reservation in the window are left out.
    pub async fn top_n(&self, reference_date: NaiveDate, n: usize) -> Result<Vec<Theme>, AppError> {
        let from = reference_date - Duration::days(7);
        let to = reference_date - Duration::days(1);

        let theme_ids = ReservationRepository::new(self.db)
            .get_theme_ids_between(from, to)
            .await?;
        let ranked = rank_themes(theme_ids, n);

        let mut themes: HashMap<i32, Theme> = ThemeRepository::new(self.db)
            .get_by_ids(ranked.clone())
            .await?
            .into_iter()
            .map(|theme| (theme.id, theme))
            .collect();

        Ok(ranked
            .into_iter()
            .filter_map(|id| themes.remove(&id))
            .collect())
    }
}

/// Ranks theme ids by occurrence count, descending, ties by id ascending.
///
/// Takes one entry per reservation and returns at most `n` distinct ids.
pub fn rank_themes(theme_ids: Vec<i32>, n: usize) -> Vec<i32> {
    let mut counts: HashMap<i32, u64> = HashMap::new();
    for id in theme_ids {
        *counts.entry(id).or_default() += 1;
    }

    let mut ranked: Vec<(i32, u64)> = counts.into_iter().collect();
    ranked.sort_by(|(a_id, a_count), (b_id, b_count)| {
        b_count.cmp(a_count).then_with(|| a_id.cmp(b_id))
    });

    ranked.into_iter().take(n).map(|(id, _)| id).collect()
}
