mod classifier;
mod command;
mod grammar;
mod splitter;
mod stager;
mod store;

// Library exports
pub mod prelude {
    // Classification pass
    pub use crate::classifier::{Classification, classify};

    // Value types
    pub use crate::command::{Command, DropTally, GroupedCommands, StageReport};

    // Grammar
    pub use crate::grammar::{CommandType, GroupType};

    // Splitting
    pub use crate::splitter::{ScriptItem, split_script};

    // Stager
    pub use crate::stager::Stager;

    // Store
    pub use crate::store::{CommandStore, MemoryStore, command_key};
}

// Internal imports for use within the crate
#[allow(unused_imports)]
pub(crate) mod imports {
    // Classification pass
    pub use crate::classifier::{Classification, classify};

    // Value types
    pub use crate::command::{Command, DropTally, GroupedCommands, StageReport};

    pub use crate::grammar::{CommandType, GroupType};

    pub use crate::splitter::{ScriptItem, split_script};

    pub use crate::store::{CommandStore, MemoryStore, command_key};

    // Result and error handling
    pub type Result<T> = anyhow::Result<T>;
    pub use anyhow::Context as _;

    // Collections
    pub use std::collections::HashMap;

    // Async
    pub use std::sync::Arc;
    pub use tokio::sync::RwLock;

    // Lazy initialization
    pub use std::sync::LazyLock;

    #[cfg(test)]
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }
}
