pub mod derives;
pub mod naming;
