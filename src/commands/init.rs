//! The `init` command: print the hook script for a host shell.

use crate::core::error::Result;
use crate::shell::Shell;

pub fn execute_init(shell: Shell) -> Result<()> {
    print!("{}", shell.init_script());
    Ok(())
}
