// MIT/Apache2 License

mod debug;
mod dispatch;
mod function;
mod functions;
mod loader;
mod marshal;
mod objects;
mod program;
mod state;
mod sync;
mod types;
mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use debug::{DebugMessage, ErrorCode, MAX_DRAINED_ERRORS};
pub use dispatch::*;
pub use function::GlFunction;
pub use loader::*;
pub use program::{ActiveVariable, ProgramBinary};
pub use sync::*;
pub use types::*;
pub use version::*;

pub(crate) use function::Slot;
