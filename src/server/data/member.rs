//! Member data repository for database operations.
//!
//! The password hash never leaves this module except through
//! `find_with_password_by_email`, which login uses for verification.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::{CreateMemberParam, Member};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a member with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.into()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds a member by email together with the stored password hash.
    ///
    /// # Returns
    /// - `Ok(Some((Member, String)))` - Member and its argon2 PHC string
    /// - `Ok(None)` - No member with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_password_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Member, String)>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|m| {
            let password = m.password.clone();
            (Member::from_entity(m), password)
        }))
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every member ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Member>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }
}
