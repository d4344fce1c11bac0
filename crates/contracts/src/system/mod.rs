pub mod users;

pub use users::SessionUser;
