pub mod course;
pub mod review;
pub mod user;

pub use course::Course;
pub use review::{Review, UserReview};
pub use user::User;
