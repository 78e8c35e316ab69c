pub mod dispatch;
pub mod home;
pub mod name;
pub mod onboard;
pub mod schema;
pub mod search;
pub mod shared;
pub mod start;
pub mod task;
