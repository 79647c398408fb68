pub mod cause;
pub mod end_to_end;
pub mod registry;
pub mod response;
