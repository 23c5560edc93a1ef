//! Stage catalog sources.
//!
//! A catalog document ships embedded in the crate; a file configured by the
//! operator replaces it entirely.

use std::{fs, path::Path};

use tasklet_types::StageCatalogs;
use tracing::debug;

use crate::CatalogError;

const EMBEDDED_CATALOG: &str = include_str!("../data/stage_catalog.json");

/// Parses the embedded stage catalog.
pub fn embedded_catalogs() -> Result<StageCatalogs, CatalogError> {
    serde_json::from_str(EMBEDDED_CATALOG).map_err(|source| CatalogError::Parse {
        origin: "(embedded)".to_string(),
        source,
    })
}

/// Loads the catalog at `path`, or the embedded one when no path is given.
pub fn load_catalogs(path: Option<&Path>) -> Result<StageCatalogs, CatalogError> {
    let Some(path) = path else {
        return embedded_catalogs();
    };
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogs: StageCatalogs = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        origin: path.display().to_string(),
        source,
    })?;
    debug!(
        path = %path.display(),
        normal_areas = catalogs.normal.len(),
        hard_areas = catalogs.hard.len(),
        "loaded stage catalog"
    );
    Ok(catalogs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tasklet_types::StageCatalog;

    #[test]
    fn embedded_catalog_parses() {
        let catalogs = embedded_catalogs().expect("embedded catalog");
        assert!(!catalogs.normal.is_empty());
        assert!(!catalogs.hard.is_empty());
        assert!(catalogs.normal.has_stage(1, 1));
        assert!(catalogs.hard.has_stage(1, 3));
    }

    #[test]
    fn file_replaces_embedded_catalog() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "hard": {{ "7": [1, 2] }} }}"#).expect("write catalog");
        let catalogs = load_catalogs(Some(file.path())).expect("catalog file");
        assert!(catalogs.normal.is_empty());
        assert!(catalogs.hard.has_stage(7, 2));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write catalog");
        assert!(matches!(load_catalogs(Some(file.path())), Err(CatalogError::Parse { .. })));
        assert!(matches!(
            load_catalogs(Some(Path::new("/no/such/catalog.json"))),
            Err(CatalogError::Read { .. })
        ));
    }
}
