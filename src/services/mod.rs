pub mod appointments;
pub mod conversation;
pub mod dates;
pub mod sessions;
pub mod specialization;
pub mod times;
