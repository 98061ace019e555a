//! Identity flow handlers: register, login, current user.
//!
//! Thin plumbing over the identity ports - credential format and
//! verification live in the adapters, never here.

mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::{GetCurrentUserHandler, GetCurrentUserQuery};
pub use login_user::{LoggedInUser, LoginUserCommand, LoginUserHandler};
pub use register_user::{
    RegisteredUser, RegisterUserCommand, RegisterUserHandler, MIN_PASSWORD_LENGTH,
};
