//! Command runners. Each one wires CLI args to the library modules and owns
//! all process I/O: reading arguments, printing results, exit behavior.
mod enrich;
mod resolve;

pub use enrich::run_enrich;
pub use resolve::run_resolve;
