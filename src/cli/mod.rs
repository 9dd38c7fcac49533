mod args;
mod args_groups;
mod parsers;
mod value_enum;

pub use args::Args;
pub use args_groups::{FilterOptions, LoggingOptions, OutputOptions, ScanOptions};
pub use value_enum::{CliOutputFormat, CliOutputMode};
