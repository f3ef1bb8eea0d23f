//! Configuration-directory implementation of the core repository traits.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tukku_core::error::TukkuResult;
use tukku_core::models::catalog::CatalogRow;
use tukku_core::models::client::ClientProfile;
use tukku_core::repository::{CatalogSource, ClientDirectory};

use crate::codes::LoginCodeMap;
use crate::error::StoreError;

/// Description used for records that do not carry one.
const DEFAULT_DESCRIPTION: &str =
    "Wholesale client configuration for product pricing and stock adjustments.";

/// File name (without extension) of the shared fallback catalog.
const DEFAULT_CATALOG: &str = "default";

/// Client directory and catalog source backed by a configuration directory.
///
/// Layout: `<root>/clients/<id>.json` holds one profile record per client,
/// `<root>/catalogs/<id>.json` holds that client's raw rows, and
/// `<root>/catalogs/default.json` is the shared fallback row set.
#[derive(Debug, Clone)]
pub struct FileRegistry {
    root: PathBuf,
    codes: LoginCodeMap,
}

impl FileRegistry {
    pub fn new(root: impl Into<PathBuf>, codes: LoginCodeMap) -> Self {
        Self {
            root: root.into(),
            codes,
        }
    }

    fn clients_dir(&self) -> PathBuf {
        self.root.join("clients")
    }

    fn catalog_path(&self, name: &str) -> PathBuf {
        self.root.join("catalogs").join(format!("{name}.json"))
    }

    async fn read_profile(&self, client_id: &str) -> Result<ClientProfile, StoreError> {
        let path = self.clients_dir().join(format!("{client_id}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    entity: "client".into(),
                    id: client_id.to_string(),
                });
            }
            Err(source) => return Err(io_error(&path, source)),
        };
        let mut profile: ClientProfile =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        resolve_presentation_fields(&mut profile, client_id);
        Ok(profile)
    }
}

/// Fill the fields that are derived rather than stored: the id comes from
/// the file name when the record omits it, and the display name and
/// description fall back to their one configured default.
fn resolve_presentation_fields(profile: &mut ClientProfile, client_id: &str) {
    if profile.id.is_empty() {
        profile.id = client_id.to_string();
    }
    if profile.display_name.is_empty() {
        profile.display_name = if profile.name.is_empty() {
            profile.id.clone()
        } else {
            profile.name.clone()
        };
    }
    if profile.description.is_empty() {
        profile.description = DEFAULT_DESCRIPTION.to_string();
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl ClientDirectory for FileRegistry {
    async fn resolve_login_code(&self, code: &str) -> TukkuResult<Option<String>> {
        Ok(self.codes.resolve(code).map(str::to_string))
    }

    async fn get_profile(&self, client_id: &str) -> TukkuResult<ClientProfile> {
        self.read_profile(client_id).await.map_err(Into::into)
    }

    async fn list_profiles(&self) -> TukkuResult<Vec<ClientProfile>> {
        let dir = self.clients_dir();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(io_error(&dir, source).into()),
        };

        let mut profiles = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| io_error(&dir, source))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(client_id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            profiles.push(self.read_profile(client_id).await?);
        }

        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(profiles)
    }
}

impl CatalogSource for FileRegistry {
    async fn load_catalog(&self, client_id: &str) -> TukkuResult<Vec<CatalogRow>> {
        let candidates = [self.catalog_path(client_id), self.catalog_path(DEFAULT_CATALOG)];
        for path in &candidates {
            match tokio::fs::read(path).await {
                Ok(bytes) => {
                    let rows = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                        path: path.display().to_string(),
                        source,
                    })?;
                    return Ok(rows);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(io_error(path, source).into()),
            }
        }
        Err(StoreError::MissingCatalog {
            client_id: client_id.to_string(),
        }
        .into())
    }
}
