mod bookings_test;
mod middleware_test;
mod operators_test;
mod status_test;
mod test_utils;
