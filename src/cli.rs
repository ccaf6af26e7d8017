//! Command line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "plotkit",
    version = crate::LONG_VERSION,
    about = "Plan a plot of land: place elements, save layouts, share links"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (.toml or .json); defaults to the platform config dir.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Open this location instead of the configured base URL. A `state`
    /// parameter on it takes precedence over the stored layout.
    #[arg(long, value_name = "URL", global = true)]
    pub link: Option<Url>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the land, elements and saved layouts.
    Show,

    /// Add an element at the land origin.
    ///
    /// Width and height default to the staged new-element size.
    Add {
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove an element by id.
    Remove { id: u64 },

    /// Move an element's top-left corner to (x, y) meters.
    Move {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Rename an element.
    Rename { id: u64, name: String },

    /// Resize the land, in meters.
    Resize { width: f64, height: f64 },

    /// Set the size used by `add` when no size is given.
    Stage { width: f64, height: f64 },

    /// Save the current land and elements as a new layout.
    Save { name: Option<String> },

    /// Load a saved layout by id, or `new` for an empty one.
    Load { layout: String },

    /// Delete a saved layout; without an id, the current one.
    Delete { id: Option<String> },

    /// Print a link that reproduces the current state.
    Share,

    /// Render the land to a PNG image.
    Render {
        #[arg(long, value_name = "PNG")]
        out: PathBuf,

        /// Use the narrow-viewport scale.
        #[arg(long)]
        mobile: bool,

        /// Write the land width and height along its edges.
        #[arg(long)]
        dimensions: bool,
    },
}
