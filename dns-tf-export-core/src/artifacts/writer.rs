//! Writes the configuration and state documents side by side.

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use dns_tf_export_provider::RecordSet;
use tempfile::NamedTempFile;

use super::{credentials_document, ConfigDocument, ResourceRecord, StateDocument};
use crate::error::{CoreError, CoreResult};
use crate::identifier::ResourceIdentifier;
use crate::types::{ArtifactPaths, ExportOptions};

/// Produces `ultradns.tf`, `terraform.tfstate` and `credentials.tf`.
///
/// The configuration is streamed into a temporary file next to its destination while
/// the state entries are collected. Nothing replaces an existing artifact until
/// [`finish`](Self::finish) has verified both documents; dropping the writer earlier
/// discards the temporary files.
pub struct DualArtifactWriter {
    paths: ArtifactPaths,
    config: ConfigDocument<BufWriter<NamedTempFile>>,
    state: StateDocument,
    credentials: Option<String>,
    /// identifier -> (zone, owner) of the record set that claimed it
    emitted: HashMap<ResourceIdentifier, (String, String)>,
}

impl DualArtifactWriter {
    /// Prepare the output directory and start the configuration document.
    pub fn create(options: &ExportOptions, lineage: &str) -> CoreResult<Self> {
        let dir = options.output_dir.as_path();
        fs::create_dir_all(dir).map_err(|e| CoreError::io(dir, &e))?;

        let paths = ArtifactPaths::in_dir(dir, options.credentials_mode);
        let config_tmp = temp_file_in(dir)?;
        let config = ConfigDocument::new(BufWriter::new(config_tmp), &options.base_url)
            .map_err(|e| CoreError::io(&paths.config, &e))?;

        Ok(Self {
            paths,
            config,
            state: StateDocument::new(&options.terraform_version, lineage),
            credentials: credentials_document::render(
                options.credentials_mode,
                &options.username,
                &options.password,
            ),
            emitted: HashMap::new(),
        })
    }

    /// Append one record set to both documents.
    pub fn emit(
        &mut self,
        record: &RecordSet,
        identifier: &ResourceIdentifier,
        zone: &str,
    ) -> CoreResult<()> {
        if let Some((first_zone, first_owner)) = self.emitted.get(identifier) {
            log::error!(
                "Identifier {identifier} of {} ({zone}) was already used by {first_owner} ({first_zone})",
                record.owner_name
            );
            return Err(CoreError::IdentifierCollision {
                identifier: identifier.to_string(),
                zone: zone.to_string(),
                owner: record.owner_name.clone(),
            });
        }

        let entry = ResourceRecord::new(record, identifier, zone)?;
        self.config
            .write_record(&entry)
            .map_err(|e| CoreError::io(&self.paths.config, &e))?;
        self.state.push(&entry);

        self.emitted.insert(
            identifier.clone(),
            (zone.to_string(), record.owner_name.clone()),
        );
        Ok(())
    }

    /// Record sets emitted so far.
    pub fn records(&self) -> usize {
        self.state.len()
    }

    /// Verify both documents and move them into place.
    pub fn finish(self) -> CoreResult<ArtifactPaths> {
        let Self {
            paths,
            config,
            state,
            credentials,
            ..
        } = self;

        let blocks = config.blocks();
        let state_json = state
            .to_json()
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        verify(&state_json, blocks)?;

        let config_tmp = config
            .into_inner()
            .into_inner()
            .map_err(|e| CoreError::io(&paths.config, e.error()))?;
        config_tmp
            .as_file()
            .sync_all()
            .map_err(|e| CoreError::io(&paths.config, &e))?;

        let dir = parent_dir(&paths.state);
        let state_tmp = write_temp(dir, &paths.state, &state_json)?;
        let credentials_tmp = match (&paths.credentials, &credentials) {
            (Some(path), Some(text)) => Some((path, write_temp(dir, path, text)?)),
            _ => None,
        };

        persist(state_tmp, &paths.state)?;
        if let Err(e) = persist(config_tmp, &paths.config) {
            log::error!(
                "{} was already replaced but {} was not; they no longer describe the same resources",
                paths.state.display(),
                paths.config.display()
            );
            return Err(e);
        }
        if let Some((path, tmp)) = credentials_tmp {
            persist(tmp, path)?;
        }

        log::info!(
            "Wrote {blocks} resources to {} and {}",
            paths.config.display(),
            paths.state.display()
        );
        Ok(paths)
    }
}

/// The state must parse back and hold exactly one resource per configuration block.
fn verify(state_json: &str, config_blocks: usize) -> CoreResult<()> {
    let value: serde_json::Value = serde_json::from_str(state_json)
        .map_err(|e| CoreError::Verification(format!("state document does not parse: {e}")))?;
    let resources = value
        .pointer("/modules/0/resources")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| {
            CoreError::Verification("state document has no resource map".to_string())
        })?;
    if resources.len() != config_blocks {
        return Err(CoreError::Verification(format!(
            "state holds {} resources but the configuration has {config_blocks} blocks",
            resources.len()
        )));
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn temp_file_in(dir: &Path) -> CoreResult<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(".dns-tf-export")
        .tempfile_in(dir)
        .map_err(|e| CoreError::io(dir, &e))
}

fn write_temp(dir: &Path, target: &Path, content: &str) -> CoreResult<NamedTempFile> {
    let mut tmp = temp_file_in(dir)?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| CoreError::io(target, &e))?;
    Ok(tmp)
}

fn persist(tmp: NamedTempFile, target: &Path) -> CoreResult<()> {
    tmp.persist(target)
        .map_err(|e| CoreError::io(target, &e.error))?;
    Ok(())
}
