pub mod a001_site;
pub mod a002_chat_message;
pub mod a003_chat_session;
pub mod a004_voice_indicator;
pub mod common;
