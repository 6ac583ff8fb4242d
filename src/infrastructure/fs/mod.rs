//! File System Implementations

mod home;
mod scaffold;

pub use home::{wazctl_home_dir, WAZCTL_TEST_HOME_VAR};
pub use scaffold::write_scaffold;
