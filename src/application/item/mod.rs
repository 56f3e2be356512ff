mod item_service;

#[allow(unused_imports)]
pub use item_service::{
    BookingRef, CommentView, ItemDetails, delete_item, get_item_by_id, get_items_by_user,
    post_comment, save_item, search_items, update_item,
};
