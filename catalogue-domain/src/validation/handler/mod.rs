mod notification;
mod throws;

pub use notification::Notification;
pub use throws::ThrowsValidationHandler;
