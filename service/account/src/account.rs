use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_account::{
    exception::{AccountException, AccountResult},
    model::{
        entity::{User, UserRole},
        vo::{Credentials, ProfileUpdate, Registration, Session},
    },
    repository::{SessionStore, UserRepo},
    service::AccountService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};

#[derive(TypedBuilder)]
pub struct AccountServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    session_store: Arc<dyn SessionStore>,
    #[builder(default)]
    user_id: Option<Uuid>,
}

impl AccountServiceImpl {
    fn actor(&self) -> AccountResult<Uuid> {
        self.user_id.ok_or(AccountException::Unauthenticated)
    }

    async fn open_session(&self, user: User) -> AccountResult<Session> {
        let token = self.session_store.issue(user.id).await?;
        Ok(Session { user, token })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, registration: Registration) -> AccountResult<Session> {
        let email = registration.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AccountException::InvalidEmail { email });
        }
        let username = registration.username.trim().to_string();
        if username.is_empty() {
            return Err(AccountException::EmptyField { field: "username" });
        }
        if registration.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountException::WeakPassword {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if self
            .user_repo
            .exists_by_email_or_username(email.clone(), username.clone())
            .await?
        {
            return Err(AccountException::DuplicateAccount);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash: hash_password(&registration.password)?,
            role: if registration.is_professional {
                UserRole::Professional
            } else {
                UserRole::User
            },
            city: non_blank(registration.city),
            postal_code: non_blank(registration.postal_code),
            first_name: non_blank(registration.first_name),
            last_name: non_blank(registration.last_name),
            profile_image_url: None,
            is_professional: registration.is_professional,
            department: non_blank(registration.department),
            phone: non_blank(registration.phone),
            created_at: now,
            updated_at: now,
        };
        self.user_repo.insert(&user).await?;
        self.user_repo.save_changed().await?;
        tracing::info!("User {} registered.", user.id);
        self.open_session(user).await
    }

    async fn login(&self, credentials: Credentials) -> AccountResult<Session> {
        let email = credentials.email.trim().to_lowercase();
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Err(AccountException::InvalidCredentials);
        };
        if !verify_password(&credentials.password, &user.password_hash)? {
            tracing::debug!("Wrong password for user {}.", user.id);
            return Err(AccountException::InvalidCredentials);
        }
        self.open_session(user).await
    }

    async fn logout(&self, token: &str) -> AccountResult<()> {
        self.session_store.revoke(token).await?;
        Ok(())
    }

    async fn current_user(&self) -> AccountResult<User> {
        let id = self.actor()?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AccountException::Unauthenticated)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> AccountResult<User> {
        let mut user = self.current_user().await?;
        let ProfileUpdate {
            first_name,
            last_name,
            city,
            postal_code,
            department,
            phone,
            profile_image_url,
        } = update;
        for (slot, value) in [
            (&mut user.first_name, first_name),
            (&mut user.last_name, last_name),
            (&mut user.city, city),
            (&mut user.postal_code, postal_code),
            (&mut user.department, department),
            (&mut user.phone, phone),
            (&mut user.profile_image_url, profile_image_url),
        ] {
            if value.is_some() {
                *slot = non_blank(value);
            }
        }
        user.updated_at = Utc::now();
        self.user_repo.update(&user).await?;
        self.user_repo.save_changed().await?;
        Ok(user)
    }

    async fn list_users(&self) -> AccountResult<Vec<User>> {
        Ok(self.user_repo.get_all().await?)
    }

    async fn get_user(&self, id: Uuid) -> AccountResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AccountException::NoSuchUser { id })
    }
}
