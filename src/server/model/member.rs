//! Member domain models and parameters.

use crate::model::member::{LoginDto, MemberDto, SignupDto};

/// Authorization role checked at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<entity::member::Role> for Role {
    fn from(role: entity::member::Role) -> Self {
        match role {
            entity::member::Role::Member => Role::Member,
            entity::member::Role::Admin => Role::Admin,
        }
    }
}

impl From<Role> for entity::member::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Member => entity::member::Role::Member,
            Role::Admin => entity::member::Role::Admin,
        }
    }
}

/// A registered member without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.into(),
        }
    }
}

/// The member performing a request, as established by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub id: i32,
    pub role: Role,
}

impl Requester {
    /// Whether the requester may act on a record owned by `owner_id`.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.role.is_admin() || self.id == owner_id
    }
}

impl From<&Member> for Requester {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            role: member.role,
        }
    }
}

/// Parameters for registering a member; the password is still plain text here.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupParam {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for persisting a member once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
