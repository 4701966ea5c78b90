use std::{
    fs, io,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

use crate::{
    bundle::{AssetBundle, Category},
    cli::InlineOptions,
};

static OUTPUT_FILENAME: &str = "inlined_assets.json";

struct InlineSession {
    input_dir: PathBuf,
    output_dir: PathBuf,

    bundle: AssetBundle,
}

pub fn inline(options: &InlineOptions) -> Result<(), InlineError> {
    let mut session = InlineSession::new(options);

    session.collect_assets()?;
    session.write_bundle()?;

    Ok(())
}

impl InlineSession {
    fn new(options: &InlineOptions) -> Self {
        log::info!("Inlining assets from '{}'", options.input_dir.display());

        InlineSession {
            input_dir: options.input_dir.clone(),
            output_dir: options.output_dir.clone(),
            bundle: AssetBundle::default(),
        }
    }

    fn collect_assets(&mut self) -> Result<(), InlineError> {
        for category in Category::ALL {
            let src_dir = self.input_dir.join(category.dir_name());

            if !src_dir.exists() {
                log::debug!("Skipping '{}', directory not found", src_dir.display());
                continue;
            }

            self.collect_category(category, &src_dir)?;
        }

        log::debug!("Collected {} assets", self.bundle.len());

        Ok(())
    }

    fn collect_category(&mut self, category: Category, src_dir: &Path) -> Result<(), InlineError> {
        for entry in fs::read_dir(src_dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();

            // Hidden-file convention
            if file_name.starts_with('.') {
                log::trace!("Skipping hidden entry '{}'", file_name);
                continue;
            }

            let path = entry.path();
            let contents = fs::read(&path).map_err(|source| InlineError::ReadAsset {
                path: path.clone(),
                source,
            })?;

            log::trace!("Encoded {}/{} ({} bytes)", category, file_name, contents.len());

            self.bundle
                .insert(category, file_name, general_purpose::STANDARD.encode(&contents));
        }

        Ok(())
    }

    fn write_bundle(&self) -> Result<(), InlineError> {
        fs::create_dir_all(&self.output_dir)?;

        let out_path = self.output_dir.join(OUTPUT_FILENAME);
        let contents = serde_json::to_string_pretty(&self.bundle)?;
        fs::write(&out_path, contents)?;

        log::info!("Wrote {}", out_path.display());

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum InlineError {
    #[error("Failed to read asset at {}", .path.display())]
    ReadAsset { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}
