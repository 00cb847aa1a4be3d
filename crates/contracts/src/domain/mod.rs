pub mod common;

pub mod a001_location;
pub mod a002_room;
