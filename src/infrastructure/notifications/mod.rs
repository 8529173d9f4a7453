mod log_chat_notifier;

pub use log_chat_notifier::LogChatNotifier;
