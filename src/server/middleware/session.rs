//! Type-safe session management wrappers.
//!
//! Session keys live here so handlers never spell them out.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_MEMBER_ID: &str = "auth:member";

/// Authentication session management.
///
/// Stores the id of the logged-in member.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member id after a successful login.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Member id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_member_id(&self, member_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_MEMBER_ID, member_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in member's id.
    ///
    /// # Returns
    /// - `Ok(Some(member_id))` - A member is logged in
    /// - `Ok(None)` - No member in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_member_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_MEMBER_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
