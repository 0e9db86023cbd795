pub mod phases;
pub mod plans;
pub mod sessions;
pub mod users;
pub mod weeks;
