pub mod projects;
pub mod tasks;
