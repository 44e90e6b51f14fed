//! Domain models with validation
//!
//! Records map 1:1 onto table rows and serialize with the JSON keys the
//! web client uses. `New*` shapes are request bodies for create.

pub mod validation;
pub mod pagination;
pub mod patch;
pub mod timestamp;
pub mod student;
pub mod lesson;
pub mod topic;
pub mod exam;
pub mod statistic;
pub mod achievement;
pub mod chatbot;

pub use validation::ValidationError;
pub use pagination::{Pagination, PaginationParams};
pub use patch::Patch;
pub use student::{NewStudent, Student, StudentPatch, MAX_SHORT_TEXT};
pub use lesson::{Lesson, NewLesson};
pub use topic::{NewTopic, Topic};
pub use exam::{ExamSimulation, NewExamSimulation};
pub use statistic::{NewStatistic, Statistic};
pub use achievement::{Achievement, NewAchievement};
pub use chatbot::{ChatbotInteraction, NewChatbotInteraction};
