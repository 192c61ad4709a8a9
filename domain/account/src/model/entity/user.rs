use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::UserModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    /// Argon2 PHC string, never sent to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_professional: bool,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromPrimitive, ToPrimitive)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User = 0,
    Professional = 1,
    Admin = 2,
}

impl AggregateRoot for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<UserModel> for User {
    type Error = anyhow::Error;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let UserModel {
            id,
            email,
            username,
            password_hash,
            role,
            city,
            postal_code,
            first_name,
            last_name,
            profile_image_url,
            is_professional,
            department,
            phone,
            created_at,
            updated_at,
        } = model;
        Ok(Self {
            id,
            email,
            username,
            password_hash,
            role: FromPrimitive::from_i32(role).ok_or(anyhow!("Wrong user role: {role}."))?,
            city,
            postal_code,
            first_name,
            last_name,
            profile_image_url,
            is_professional,
            department,
            phone,
            created_at,
            updated_at,
        })
    }
}

impl From<User> for UserModel {
    fn from(entity: User) -> Self {
        let User {
            id,
            email,
            username,
            password_hash,
            role,
            city,
            postal_code,
            first_name,
            last_name,
            profile_image_url,
            is_professional,
            department,
            phone,
            created_at,
            updated_at,
        } = entity;
        Self {
            id,
            email,
            username,
            password_hash,
            role: role as i32,
            city,
            postal_code,
            first_name,
            last_name,
            profile_image_url,
            is_professional,
            department,
            phone,
            created_at,
            updated_at,
        }
    }
}
