pub mod booking;
pub mod conversation;
pub mod knowledge;

pub use booking::{Appointment, Booking};
pub use conversation::{ConversationState, Step};
pub use knowledge::{KnowledgeBase, Specialty};
