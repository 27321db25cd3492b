//! Page components

mod about;
mod companies;
mod home;
mod jobs;
mod onboarding;
mod post_job;
mod sign_up;

pub use about::About;
pub use companies::Companies;
pub use home::Home;
pub use jobs::Jobs;
pub use onboarding::Onboarding;
pub use post_job::PostJob;
pub use sign_up::SignUp;
