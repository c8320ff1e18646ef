pub mod user;
pub mod activity;
pub mod company;

pub use user::*;
pub use activity::*;
pub use company::*;
