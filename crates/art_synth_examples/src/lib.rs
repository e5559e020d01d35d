#![forbid(unsafe_code)]

mod output;

pub use output::{init_tracing, write_svg_file};
