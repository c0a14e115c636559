pub mod cli;
pub mod contributors;
pub mod detect;
pub mod developer;
pub mod error;
pub mod git;
pub mod lang;
pub mod model;
pub mod report;
pub mod timeago;
