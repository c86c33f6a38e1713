mod filesize_format;
mod number_format;
mod to_fixed;
mod to_number;

pub use filesize_format::*;
pub use number_format::*;
pub use to_fixed::*;
pub use to_number::*;
