//! Page components.

mod login;
mod not_found;
mod student_dashboard;
mod teacher_batches;
mod teacher_dashboard;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use student_dashboard::StudentDashboardPage;
pub use teacher_batches::TeacherBatchesPage;
pub use teacher_dashboard::TeacherDashboardPage;
