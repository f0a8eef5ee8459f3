//! CLI command implementations

mod chapter;
mod config;
mod convert;
mod export;
mod info;
mod toc;
mod validate;

pub use chapter::chapter;
pub use config::config;
pub use convert::convert;
pub use export::export;
pub use info::info;
pub use toc::toc;
pub use validate::validate;
