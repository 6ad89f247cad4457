//! Reusable UI components.

mod avatar;
mod batch_item;
mod coming_soon;
mod notification_item;
mod stat_card;
mod student_layout;
mod teacher_layout;

pub use avatar::Avatar;
pub use batch_item::BatchItem;
pub use coming_soon::ComingSoon;
pub use notification_item::NotificationItem;
pub use stat_card::StatCard;
pub use student_layout::StudentLayout;
pub use teacher_layout::TeacherLayout;
