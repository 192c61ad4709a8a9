use std::sync::Arc;

use chrono::Utc;
use domain_account::{
    exception::AccountException,
    mock::{MockSessionStore, MockUserRepo},
    model::{
        entity::{User, UserRole},
        vo::{Credentials, ProfileUpdate, Registration},
    },
    service::AccountService,
};
use service_account::{hash_password, verify_password, AccountServiceImpl};
use uuid::Uuid;

fn registration(email: &str, password: &str) -> Registration {
    Registration {
        email: email.to_string(),
        username: "mdupont".to_string(),
        password: password.to_string(),
        first_name: Some("Marie".to_string()),
        last_name: Some("Dupont".to_string()),
        city: Some("Lyon".to_string()),
        postal_code: Some("69001".to_string()),
        department: Some("  ".to_string()),
        phone: None,
        is_professional: true,
    }
}

fn stored_user(password: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: "marie@hopital.fr".to_string(),
        username: "mdupont".to_string(),
        password_hash: hash_password(password).unwrap(),
        role: UserRole::User,
        city: None,
        postal_code: None,
        first_name: None,
        last_name: None,
        profile_image_url: None,
        is_professional: false,
        department: None,
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn issuing_store() -> MockSessionStore {
    let mut store = MockSessionStore::new();
    store.expect_issue().returning(|_| Ok("token".to_string()));
    store
}

#[tokio::test]
async fn register_hashes_password_and_opens_session() {
    let mut repo = MockUserRepo::new();
    repo.expect_exists_by_email_or_username()
        .withf(|email, username| email == "marie@hopital.fr" && username == "mdupont")
        .returning(|_, _| Ok(false));
    repo.expect_insert()
        .withf(|u: &User| {
            u.role == UserRole::Professional
                && u.department.is_none()
                && verify_password("motdepasse", &u.password_hash).unwrap()
        })
        .times(1)
        .returning(|u: &User| Ok(u.id));
    repo.expect_save_changed().times(1).returning(|| Ok(true));

    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(repo))
        .session_store(Arc::new(issuing_store()))
        .build();
    let session = service
        .register(registration(" Marie@Hopital.fr ", "motdepasse"))
        .await
        .unwrap();
    assert_eq!(session.token, "token");
    assert_eq!(session.user.email, "marie@hopital.fr");
}

#[tokio::test]
async fn register_rejects_duplicates() {
    let mut repo = MockUserRepo::new();
    repo.expect_exists_by_email_or_username().returning(|_, _| Ok(true));
    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(repo))
        .session_store(Arc::new(MockSessionStore::new()))
        .build();
    let err = service
        .register(registration("marie@hopital.fr", "motdepasse"))
        .await
        .unwrap_err();
    assert!(matches!(err, AccountException::DuplicateAccount));
    assert_eq!(err.to_string(), "Email or username already exists");
}

#[tokio::test]
async fn register_validates_email_and_password() {
    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(MockUserRepo::new()))
        .session_store(Arc::new(MockSessionStore::new()))
        .build();
    let bad_email = service.register(registration("marie", "motdepasse")).await;
    assert!(matches!(bad_email, Err(AccountException::InvalidEmail { .. })));
    let short = service.register(registration("marie@hopital.fr", "court")).await;
    assert!(matches!(short, Err(AccountException::WeakPassword { min: 8 })));
}

#[tokio::test]
async fn login_with_wrong_password_or_unknown_email_fails_the_same_way() {
    let user = stored_user("motdepasse");
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_email().returning(move |email| {
        Ok((email == "marie@hopital.fr").then(|| user.clone()))
    });
    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(repo))
        .session_store(Arc::new(issuing_store()))
        .build();

    let wrong = service
        .login(Credentials {
            email: "marie@hopital.fr".to_string(),
            password: "mauvais!".to_string(),
        })
        .await
        .unwrap_err();
    let unknown = service
        .login(Credentials {
            email: "personne@hopital.fr".to_string(),
            password: "motdepasse".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(wrong.to_string(), "Invalid email or password");
    assert_eq!(unknown.to_string(), wrong.to_string());

    let session = service
        .login(Credentials {
            email: "MARIE@hopital.fr".to_string(),
            password: "motdepasse".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "token");
}

#[tokio::test]
async fn current_user_requires_actor() {
    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(MockUserRepo::new()))
        .session_store(Arc::new(MockSessionStore::new()))
        .build();
    assert!(matches!(
        service.current_user().await,
        Err(AccountException::Unauthenticated)
    ));
}

#[tokio::test]
async fn profile_update_only_touches_given_fields() {
    let mut user = stored_user("motdepasse");
    user.city = Some("Paris".to_string());
    user.phone = Some("0102030405".to_string());
    let user_id = user.id;
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(move |_| Ok(Some(user.clone())));
    repo.expect_update()
        .withf(|u: &User| {
            u.city.as_deref() == Some("Lille")
                && u.phone.as_deref() == Some("0102030405")
                && u.department.is_none()
        })
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_save_changed().returning(|| Ok(true));
    let service = AccountServiceImpl::builder()
        .user_repo(Arc::new(repo))
        .session_store(Arc::new(MockSessionStore::new()))
        .user_id(Some(user_id))
        .build();
    let updated = service
        .update_profile(ProfileUpdate {
            city: Some("Lille".to_string()),
            department: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.city.as_deref(), Some("Lille"));
}
