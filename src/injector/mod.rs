pub mod channel_injector;
pub mod json_lines_injector;
pub mod key_injector;
pub mod logging_injector;

pub use channel_injector::ChannelInjector;
pub use json_lines_injector::JsonLinesInjector;
pub use key_injector::KeyInjector;
pub use logging_injector::LoggingInjector;
