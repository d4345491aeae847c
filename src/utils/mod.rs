mod string_encoding;
mod io;

pub(crate) use string_encoding::*;
pub(crate) use io::*;
