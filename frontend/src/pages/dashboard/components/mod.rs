pub mod resource_section;
pub mod summary;
pub mod users;

pub use resource_section::ResourceSection;
pub use summary::SummarySection;
pub use users::UsersSection;
