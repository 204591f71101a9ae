use crate::config;
use crate::publish::FtpCredentials;
use crate::report::{Justify, RenderOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "maprun-standings")]
#[command(about = "Merge MapRun score-event results into overall and age-category standings")]
#[command(version)]
pub struct CliArgs {
    /// Season to build; reads events_<YEAR>.json and writes <YEAR>.csv / <YEAR>.html
    #[arg(value_name = "YEAR", required_unless_present = "payload")]
    pub year: Option<String>,

    /// Directory containing events_<YEAR>.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Directory the CSV and HTML files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Download score-sheets concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Write local files only, even if upload credentials are set
    #[arg(long)]
    pub no_upload: bool,

    /// HTML page title (default: "Results <YEAR>")
    #[arg(long)]
    pub title: Option<String>,

    /// Stylesheet linked from the HTML page
    #[arg(long, value_name = "HREF", default_value = "results.css")]
    pub stylesheet: String,

    /// Alignment of the HTML header row
    #[arg(long, value_enum, default_value_t = Justify::Left)]
    pub header_justify: Justify,

    /// FTP host, optionally with :port
    #[arg(long, env = "STANDINGS_FTP_ADDRESS")]
    pub ftp_address: Option<String>,

    /// Remote directory to upload into
    #[arg(long, env = "STANDINGS_FTP_DIRECTORY", default_value = "/public_html/")]
    pub ftp_directory: String,

    #[arg(long, env = "STANDINGS_FTP_USERNAME")]
    pub ftp_username: Option<String>,

    #[arg(long, env = "STANDINGS_FTP_PASSWORD", hide_env_values = true)]
    pub ftp_password: Option<String>,

    /// Run with a JSON invocation payload instead of a config file ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "year")]
    pub payload: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        match self.year {
            Some(ref year) => config::validate_year(year),
            None => Ok(()),
        }
    }

    /// Label naming the output files
    pub fn label(&self) -> String {
        self.year.clone().unwrap_or_default()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone().unwrap_or_else(|| format!("Results {}", self.label())),
            stylesheet: self.stylesheet.clone(),
            header_justify: self.header_justify,
            ..RenderOptions::default()
        }
    }

    pub fn credentials(&self) -> FtpCredentials {
        FtpCredentials {
            address: self.ftp_address.clone(),
            directory: self.ftp_directory.clone(),
            username: self.ftp_username.clone(),
            password: self.ftp_password.clone(),
        }
    }
}
