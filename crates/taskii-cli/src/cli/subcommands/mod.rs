mod task;

pub use task::{EditArgs, TaskCommands, TaskFormArgs};
