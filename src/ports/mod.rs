#[allow(unused_imports)]
pub mod booking_store;
#[allow(unused_imports)]
pub mod comment_store;
#[allow(unused_imports)]
pub mod item_store;
#[allow(unused_imports)]
pub mod request_store;
#[allow(unused_imports)]
pub mod user_store;

#[allow(unused_imports)]
pub use booking_store::*;
#[allow(unused_imports)]
pub use comment_store::*;
#[allow(unused_imports)]
pub use item_store::*;
#[allow(unused_imports)]
pub use request_store::*;
#[allow(unused_imports)]
pub use user_store::*;
