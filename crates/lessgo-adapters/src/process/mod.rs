//! Command runner adapters.

mod scripted;
mod system;

pub use scripted::ScriptedCommandRunner;
pub use system::SystemCommandRunner;
