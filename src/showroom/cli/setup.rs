use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showroom", bin_name = "showroom", version)]
#[command(
    about = "Browse, render and inspect the product and blog pages of the site",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding site.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Catalog file, overriding `content_file` from site.json
    #[arg(long, global = true, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List one page of products or blogs
    #[command(alias = "ls")]
    List {
        /// `products` or `blogs`
        kind: String,

        /// Only show items in this category (exact match)
        #[arg(long, short)]
        category: Option<String>,

        /// Page number, starting at 1
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Show the categories present in products or blogs
    Categories {
        kind: String,
    },

    /// Show a single item
    View {
        kind: String,
        id: String,
    },

    /// Render the full HTML document for a location, e.g. `/products?productId=5`
    Render {
        location: String,

        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, short, default_value_t = 1)]
        page: usize,

        /// Open this item's detail view
        #[arg(long, value_name = "ID")]
        select: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Show the head metadata for a location
    Meta {
        location: String,
    },

    /// Show the route metadata table and check its ordering
    Routes,

    /// Show the effective configuration
    Config,
}
