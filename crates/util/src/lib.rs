pub mod command_line;
pub mod path_processing;

pub use command_line::*;
pub use path_processing::*;
