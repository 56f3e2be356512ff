mod booking_store;
mod comment_store;
mod item_store;
mod request_store;
mod user_store;

#[allow(unused_imports)]
pub use booking_store::BookingStore as PostgresBookingStore;
#[allow(unused_imports)]
pub use comment_store::CommentStore as PostgresCommentStore;
#[allow(unused_imports)]
pub use item_store::ItemStore as PostgresItemStore;
#[allow(unused_imports)]
pub use request_store::RequestStore as PostgresRequestStore;
#[allow(unused_imports)]
pub use user_store::UserStore as PostgresUserStore;
