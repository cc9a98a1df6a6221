pub mod options;
pub mod summarize;
pub mod system;
