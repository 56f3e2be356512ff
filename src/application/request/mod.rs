mod request_service;

#[allow(unused_imports)]
pub use request_service::{
    RequestWithItems, add_request, get_all_requests, get_own_requests, get_request_by_id,
};
