mod session;
mod user;

#[rustfmt::skip]
pub use {
    session::SessionStore,
    user::UserRepo,
};
