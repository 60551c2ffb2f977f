use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{CreateMemberParam, LoginParam, Member, Role, SignupParam},
    util::{
        db::conflict_on_unique,
        password::{hash_password, verify_password},
        validate::require_non_blank,
    },
};

/// Display name of an administrator created at startup.
const ADMIN_NAME: &str = "admin";

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member with the `Member` role.
    ///
    /// The password is stored as an argon2 hash.
    ///
    /// # Returns
    /// - `Ok(Member)` - The registered member
    /// - `Err(AppError::BadRequest)` - Name, email or password is blank
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn signup(&self, param: SignupParam) -> Result<Member, AppError> {
        require_non_blank("name", &param.name)?;
        require_non_blank("email", &param.email)?;
        require_non_blank("password", &param.password)?;

        let repo = MemberRepository::new(self.db);

        if repo.exists_by_email(&param.email).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                param.email
            )));
        }

        let password_hash = hash_password(&param.password)?;

        let member = repo
            .create(CreateMemberParam {
                name: param.name,
                email: param.email,
                password_hash,
                role: Role::Member,
            })
            .await
            .map_err(|e| conflict_on_unique(e, "Email is already registered"))?;

        tracing::info!("Registered member {}", member.id);

        Ok(member)
    }

    /// Makes sure an administrator account exists for `email`.
    ///
    /// Creates the account when the email is unknown and returns an existing
    /// administrator unchanged. Called at startup with the configured
    /// credentials.
    ///
    /// # Returns
    /// - `Ok(Member)` - The administrator
    /// - `Err(AppError::BadRequest)` - Email or password is blank
    /// - `Err(AppError::Conflict)` - The email belongs to a regular member
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<Member, AppError> {
        require_non_blank("admin email", email)?;
        require_non_blank("admin password", password)?;

        let repo = MemberRepository::new(self.db);

        if let Some((member, _)) = repo.find_with_password_by_email(email).await? {
            if !member.role.is_admin() {
                return Err(AppError::Conflict(format!(
                    "Email {} is registered to member {} without the admin role",
                    email, member.id
                )));
            }
            return Ok(member);
        }

        let admin = repo
            .create(CreateMemberParam {
                name: ADMIN_NAME.to_string(),
                email: email.to_string(),
                password_hash: hash_password(password)?,
                role: Role::Admin,
            })
            .await
            .map_err(|e| conflict_on_unique(e, "Email is already registered"))?;

        tracing::info!("Created administrator account {}", admin.id);

        Ok(admin)
    }

    /// Verifies credentials.
    ///
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    pub async fn login(&self, param: LoginParam) -> Result<Member, AppError> {
        let found = MemberRepository::new(self.db)
            .find_with_password_by_email(&param.email)
            .await?;

        match found {
            Some((member, hash)) if verify_password(&param.password, &hash) => Ok(member),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<Member>, AppError> {
        Ok(MemberRepository::new(self.db).get_all().await?)
    }
}
