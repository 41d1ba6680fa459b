pub mod content;
pub mod course;
pub mod post;
pub mod schedule;
pub mod session;
pub mod teacher;

pub use content::{AppContent, Collection, Item, NewItem};
pub use course::{Course, NewCourse};
pub use post::{NewPost, Post};
pub use schedule::{NewScheduleItem, ScheduleItem};
pub use session::{Theme, User, View};
pub use teacher::{NewTeacher, Teacher};
