pub mod chat;
pub mod profile_modal;

pub use chat::ChatView;
pub use profile_modal::ProfileModal;
