//! Configuration loading and resolution.
//!
//! Settings are layered from default config files, explicit `--config` files,
//! `FNVSUM__*` environment variables and finally CLI flags. `load` is the entry
//! point and returns the validated [`ResolvedConfig`] used by the binary.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
