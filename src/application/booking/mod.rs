mod booking_service;

#[allow(unused_imports)]
pub use booking_service::{
    create_booking, decide_booking, get_booking_for_participant, list_bookings_for_booker,
    list_bookings_for_owner,
};
