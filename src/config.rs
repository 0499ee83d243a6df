use std::{
    env,
    path::{Path, PathBuf},
};
use url::Url;

use crate::{
    error::{ExtractError, Result},
    fetch::ExtractionRequest,
    process::HeaderMode,
};

/// Extracts are always written here, next to the executable.
pub const OUTPUT_DIR: &str = "output_data";

/// Validated parameters for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub server: Url,
    pub request: ExtractionRequest,
    pub header_mode: HeaderMode,
    pub output_file: String,
}

impl ExtractConfig {
    pub fn new(
        server: &str,
        token: &str,
        primary_key: &str,
        fields: &str,
        header_mode: HeaderMode,
        output_file: &str,
    ) -> Result<Self> {
        let server = parse_server_url(server)?;
        let fields: Vec<&str> = fields.split(',').collect();
        let request = ExtractionRequest::new(token, primary_key, &fields)?;
        if output_file.trim().is_empty() {
            return Err(ExtractError::config("output file name is empty"));
        }

        Ok(Self {
            server,
            request,
            header_mode,
            output_file: output_file.to_string(),
        })
    }

    /// `<base>/output_data/<output file>`
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(OUTPUT_DIR).join(&self.output_file)
    }
}

fn parse_server_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ExtractError::config(format!("invalid server URL {:?}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExtractError::config(format!(
            "server URL must be http or https, got {}",
            other
        ))),
    }
}

/// Directory holding the running executable, symlinks resolved.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|e| ExtractError::config(format!("locating executable: {}", e)))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ExtractError::config("executable has no parent directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(server: &str) -> Result<ExtractConfig> {
        ExtractConfig::new(
            server,
            "TOKEN",
            "record_id",
            "dob,firstname,lastname",
            HeaderMode::Include,
            "dob.csv",
        )
    }

    #[test]
    fn test_builds_request_from_field_list() {
        let cfg = config("https://redcap.example.org/api/").unwrap();
        assert_eq!(
            cfg.request.fields(),
            "record_id,redcap_event_name,dob,firstname,lastname"
        );
        assert_eq!(cfg.request.secondary_key(), "dob");
        assert_eq!(cfg.server.as_str(), "https://redcap.example.org/api/");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(matches!(config("ftp://redcap.example.org/"), Err(ExtractError::Config(_))));
        assert!(matches!(config("not a url"), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_output_path() {
        let cfg = config("http://localhost/api/").unwrap();
        let base = Path::new("/opt/redcap");
        assert_eq!(
            cfg.output_path(base),
            Path::new("/opt/redcap").join("output_data").join("dob.csv")
        );
    }

    #[test]
    fn test_executable_dir_exists() {
        assert!(executable_dir().unwrap().is_dir());
    }
}
