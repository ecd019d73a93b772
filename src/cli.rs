use clap::{Parser, Subcommand};
use portfolio_media_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-media")]
#[command(about = "Add images and videos to the portfolio catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Website project root (default: $PORTFOLIO_ROOT, config, then current dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the media directories and an empty catalog
    Init,

    /// Copy a file into the portfolio and append its record
    Add {
        /// Image or video to add
        #[arg(required = true)]
        file: PathBuf,

        /// Category key (3d-tours, interior, exterior, drone, virtual-staging, floorplans, portraits)
        #[arg(short, long)]
        category: Option<Category>,

        /// Title (default: file name without extension)
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        client: String,

        #[arg(long, default_value = "")]
        results: String,

        /// YYYY-MM-DD (default: today)
        #[arg(long, default_value = "")]
        date: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Fill in the form field by field, then add
    Interactive {
        /// File to add; prompted for when omitted
        file: Option<PathBuf>,
    },

    /// Show catalog records, most recent first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report media files no record uses and records whose file is missing
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit settings
    Config {
        /// Persist the website project root
        #[arg(long)]
        set_root: Option<PathBuf>,

        /// Persist the category preselected in the form
        #[arg(long)]
        set_default_category: Option<Category>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
