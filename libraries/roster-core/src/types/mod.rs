//! Domain types
mod page;
mod user;

pub use page::{Page, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use user::{
    CreateUser, UpdateUser, User, UserId, EMAIL_MAX_LEN, NAME_MAX_LEN, ROLE_MAX_LEN,
};
