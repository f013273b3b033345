//! Folder tree command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filelist_core::config::AppConfig;
use filelist_core::error::AppError;
use filelist_entity::folder::{FolderNode, FolderTree};

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Folder ID to start from (omit for the drive root)
    #[arg(long)]
    pub folder: Option<String>,

    /// Print an indented outline instead of a table
    #[arg(long)]
    pub outline: bool,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub struct FolderRow {
    /// Folder ID
    pub id: String,
    /// Name
    pub name: String,
    /// Depth below the searched folder
    pub depth: usize,
    /// Path of names from the searched folder
    pub path: String,
}

impl FolderRow {
    /// Row for `node`, with its path resolved to names through `tree`.
    pub fn from_node(node: &FolderNode, tree: &FolderTree) -> Self {
        let path = node
            .id_path()
            .iter()
            .map(|id| tree.get(id).map_or(id.as_str(), |n| n.name.as_str()))
            .collect::<Vec<_>>()
            .join("/");
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            depth: node.depth(),
            path,
        }
    }
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config)?;
    let tree = match &args.folder {
        Some(id) => service.folder_tree(id).await?,
        None => service.root_folder_tree().await?,
    };

    match format {
        OutputFormat::Json => output::print_json(&tree),
        OutputFormat::Table if args.outline => {
            for line in tree.render_lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Table => {
            let rows: Vec<FolderRow> = tree
                .iter()
                .map(|node| FolderRow::from_node(node, &tree))
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
