//! Default locations stored in `~/.midils`
//!
//! .
//! └── log
//!    └── midils.log
//!

use std::path::PathBuf;

pub fn midils() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".midils"))
}

pub fn log() -> Option<PathBuf> {
    Some(midils()?.join("log"))
}

pub fn log_file() -> Option<PathBuf> {
    Some(log()?.join("midils.log"))
}
