mod alert;
mod audit;
mod notification;

pub use alert::AlertServiceImpl;
pub use audit::AuditServiceImpl;
pub use notification::NotificationServiceImpl;
