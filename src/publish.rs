/// Upload of the standings files to the results host
///
/// Files are sent over plain FTP into a configured directory. When the
/// address, username or password is missing the upload is skipped; the
/// run still succeeds with its local files.
use crate::error::{Result, StandingsError};
use log::{debug, info, warn};
use std::fs::File;
use std::path::PathBuf;
use suppaftp::FtpStream;

const DEFAULT_FTP_PORT: u16 = 21;

/// Upload settings as supplied by the caller; any field may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FtpCredentials {
    pub address: Option<String>,
    pub directory: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Complete upload settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpTarget {
    pub address: String,
    pub directory: String,
    pub username: String,
    pub password: String,
}

impl FtpCredentials {
    /// Resolve into a target, or the reason publishing must be skipped
    pub fn target(&self) -> std::result::Result<FtpTarget, String> {
        let present = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from);

        let mut missing = Vec::new();
        let address = present(&self.address);
        let username = present(&self.username);
        let password = self.password.clone().filter(|p| !p.is_empty());
        if address.is_none() {
            missing.push("address");
        }
        if username.is_none() {
            missing.push("username");
        }
        if password.is_none() {
            missing.push("password");
        }

        match (address, username, password) {
            (Some(address), Some(username), Some(password)) => {
                Ok(FtpTarget { address, directory: self.directory.clone(), username, password })
            }
            _ => Err(format!("upload credentials not set ({})", missing.join(", "))),
        }
    }
}

impl FtpTarget {
    /// `host:port`, defaulting the port to 21
    pub fn socket_address(&self) -> String {
        let has_port = self.address.rsplit_once(':').is_some_and(|(_, port)| port.parse::<u16>().is_ok());
        if has_port { self.address.clone() } else { format!("{}:{}", self.address, DEFAULT_FTP_PORT) }
    }
}

/// What happened to the upload step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Uploaded(usize),
    Skipped(String),
}

/// Upload `files` by file name, or skip if credentials are incomplete
pub fn publish_files(credentials: &FtpCredentials, files: &[PathBuf]) -> Result<PublishOutcome> {
    let target = match credentials.target() {
        Ok(target) => target,
        Err(reason) => {
            warn!("Skipping upload: {}", reason);
            return Ok(PublishOutcome::Skipped(reason));
        }
    };

    upload(&target, files)
        .map_err(|message| StandingsError::Publish { address: target.address.clone(), message })?;
    Ok(PublishOutcome::Uploaded(files.len()))
}

fn upload(target: &FtpTarget, files: &[PathBuf]) -> std::result::Result<(), String> {
    let address = target.socket_address();
    debug!("Connecting to {}", address);

    let mut ftp = FtpStream::connect(&address).map_err(|e| e.to_string())?;
    ftp.login(target.username.as_str(), target.password.as_str()).map_err(|e| e.to_string())?;
    if !target.directory.is_empty() {
        ftp.cwd(&target.directory).map_err(|e| format!("cwd {}: {}", target.directory, e))?;
    }

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| format!("{} has no file name", path.display()))?;
        let mut file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let bytes = ftp.put_file(&name, &mut file).map_err(|e| format!("STOR {}: {}", name, e))?;
        info!("Uploaded {} ({} bytes)", name, bytes);
    }

    ftp.quit().map_err(|e| e.to_string())
}
