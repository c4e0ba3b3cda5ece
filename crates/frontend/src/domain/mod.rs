pub mod a001_site;
pub mod a003_chat_session;
