//! Process and clock implementations

mod clock;
mod system;

pub use clock::SystemClock;
pub use system::SystemCommandRunner;
