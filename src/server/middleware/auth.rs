use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
};

pub enum Permission {
    Admin,
}

/// Resolves the logged-in member from the session and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session's member and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member is logged in and holds every permission
    /// - `Err(AuthError::UserNotInSession)` - No member id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted member
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(member) = member_repo.find_by_id(member_id).await? else {
            return Err(AuthError::UserNotInDatabase(member_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !member.role.is_admin() {
                        return Err(AuthError::AccessDenied(
                            member_id,
                            "Member attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}
