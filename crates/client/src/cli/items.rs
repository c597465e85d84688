//! Item CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List incomplete items.
    List,
    /// Get a single item by ID.
    Get {
        /// Item identifier.
        id: Uuid,
    },
    /// Create a new item.
    Create {
        /// Item description.
        description: String,
        /// Explicit identifier (the server generates one when omitted).
        #[arg(long)]
        id: Option<Uuid>,
    },
    /// Replace an item wholesale.
    Update {
        /// Item identifier.
        id: Uuid,
        /// New description.
        #[arg(long)]
        description: String,
        /// Completion flag.
        #[arg(long)]
        completed: bool,
    },
    /// Mark an item as completed.
    Complete {
        /// Item identifier.
        id: Uuid,
    },
}
