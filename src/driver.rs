use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CoverError;
use crate::extract::PageRasterizer;
use crate::naming;
use crate::output::OutputFormat;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Raw `--ext` value; normalized when the run starts.
    pub extension: String,
    pub rescale: bool,
}

/// One written cover page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub conversions: Vec<Conversion>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}

/// Extracts the cover of every `.pdf` in `config.input_dir`, in name order.
///
/// Stops at the first failing file; covers written before it stay on disk.
pub fn run_batch<R>(rasterizer: &R, config: &BatchConfig) -> Result<BatchReport, CoverError>
where
    R: PageRasterizer + ?Sized,
{
    let format = OutputFormat::from_extension(&config.extension)?;
    ensure_output_dir(&config.output_dir)?;

    let sources = list_pdfs(&config.input_dir)?;
    info!(
        count = sources.len(),
        input = %config.input_dir.display(),
        format = ?format.image_format(),
        "found PDF files"
    );

    let mut report = BatchReport::default();
    for source in sources {
        let cover = rasterizer.rasterize_first_page(&source, config.rescale)?;

        let output = config
            .output_dir
            .join(naming::output_file_name(&source, format.extension()));
        format.write(&cover, &output)?;

        info!(
            source = %source.display(),
            output = %output.display(),
            width = cover.width(),
            height = cover.height(),
            "wrote cover page"
        );
        report.conversions.push(Conversion { source, output });
    }

    Ok(report)
}

/// Creates `dir` if needed. Only the last path component is created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), CoverError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir(dir).map_err(|e| CoverError::filesystem("create output directory", dir, e))?;
    debug!(dir = %dir.display(), "created output directory");
    Ok(())
}

/// Regular files directly in `dir` whose name ends in lowercase `.pdf`, sorted by name.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>, CoverError> {
    let list_error = |e| CoverError::filesystem("list input directory", dir, e);

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if !naming::is_pdf_path(&path) {
            continue;
        }
        if !path.is_file() {
            warn!(path = %path.display(), "skipping .pdf entry that is not a file");
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}
