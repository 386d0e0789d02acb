pub mod check;
pub mod promote;
pub mod source_loader;
