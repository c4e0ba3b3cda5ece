pub mod session;

pub use session::{ChatSession, PendingReply, ReplyError, ReplyTicket, SendRejected, SessionState};
