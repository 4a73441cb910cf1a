use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

pub struct ReportWriter;

impl ReportWriter {
    /// Write `report` verbatim to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created first.
    pub fn write(report: &str, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            debug!("Created output directory: {}", parent.display());
        }

        let mut file = File::create(path)?;
        file.write_all(report.as_bytes())?;

        info!("Report saved: {}", path.display());
        Ok(())
    }
}
