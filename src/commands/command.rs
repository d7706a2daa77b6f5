use crate::core::prelude::*;

#[async_trait::async_trait(?Send)]
pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn matches(&self, command: &str) -> bool;

    fn usage(&self) -> &'static str {
        self.name()
    }

    // Main entry point; defaults to the sync path
    async fn execute(&self, args: &[&str]) -> Result<String> {
        self.execute_sync(args)
    }

    // Sync path for commands that never touch I/O
    fn execute_sync(&self, args: &[&str]) -> Result<String> {
        futures::executor::block_on(self.execute(args))
    }

    fn priority(&self) -> u8 {
        50
    }
    fn is_available(&self) -> bool {
        true
    }
}
