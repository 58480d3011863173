//! Page bodies, one per [`Route`](crate::ui::navigation::Route).

pub mod conversation;
pub mod home;

pub use conversation::{ConversationPage, InjectedFault, Message, Role};
pub use home::render_home;
