mod user_service;

#[allow(unused_imports)]
pub use user_service::{delete_user, get_all_users, get_user_by_id, save_user, update_user};
