//! Configuration loading and resolution.
//!
//! Values are layered from defaults, config files, `QSEARCH__*` environment
//! variables and command-line flags. [`load`] runs the whole pipeline and
//! returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
