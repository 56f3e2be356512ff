mod booking;
mod item;
mod request;
mod user;

use crate::application::ServiceDependencies;

#[allow(unused_imports)]
pub use booking::{
    decide_booking, get_booking, list_bookings_for_booker, list_bookings_for_owner, save_booking,
};
#[allow(unused_imports)]
pub use item::{
    delete_item, get_item_by_id, get_items_by_user, save_comment, save_item, search_items,
    update_item,
};
#[allow(unused_imports)]
pub use request::{add_request, get_all_requests, get_request_by_id, get_requests};
#[allow(unused_imports)]
pub use user::{delete_user, get_all_users, get_user_by_id, save_user, update_user};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}
