use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ConvertConfig;
use crate::converter::{convert_image, ConversionRequest};
use crate::error::ProcessingError;
use crate::format::SourceFormat;
use crate::report::{FileResult, Report};

/// Name of the output directory created next to the input folder.
pub const OUTPUT_DIR_NAME: &str = "webp";

/// Emitted once per file after its conversion attempt.
#[derive(Debug, Clone)]
pub struct Progress<'a> {
    /// 1-based position in the batch
    pub index: usize,
    pub total: usize,
    pub source: &'a Path,
    pub destination: &'a Path,
    pub error: Option<&'a str>,
}

impl Progress<'_> {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// `<parent-of-input>/webp`. A path with no parent uses itself as the base.
pub fn output_dir_for(input: &Path) -> PathBuf {
    input.parent().unwrap_or(input).join(OUTPUT_DIR_NAME)
}

/// `<output_dir>/<source stem>.webp`
pub fn destination_for(output_dir: &Path, source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".webp");
    output_dir.join(name)
}

/// Supported image files directly inside `input`, sorted by file name.
pub fn collect_images(input: &Path) -> Result<Vec<PathBuf>, ProcessingError> {
    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => return Some(Err(ProcessingError::from(e))),
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let path = entry.into_path();
            let format = SourceFormat::from_path(&path)?;
            log::debug!("Queued {} ({})", path.display(), format.as_str());
            Some(Ok(path))
        })
        .collect()
}

/// Convert every supported image directly inside `input` into the sibling
/// `webp` directory.
///
/// A missing or non-directory input fails before anything is created. Per
/// file failures are logged, recorded in the report and never stop the
/// batch.
pub fn process_folder<F>(
    input: &Path,
    config: &ConvertConfig,
    mut on_progress: F,
) -> Result<Report, ProcessingError>
where
    F: FnMut(&Progress<'_>),
{
    if !input.is_dir() {
        return Err(ProcessingError::InputNotDirectory {
            path: input.to_path_buf(),
        });
    }

    let output_dir = output_dir_for(input);
    fs::create_dir_all(&output_dir).map_err(|e| ProcessingError::CreateDir {
        path: output_dir.clone(),
        source: e,
    })?;

    let files = collect_images(input)?;
    log::debug!(
        "Found {} image(s) in {}, writing to {}",
        files.len(),
        input.display(),
        output_dir.display()
    );

    let total = files.len();
    let mut report = Report::new();

    for (i, source) in files.into_iter().enumerate() {
        let destination = destination_for(&output_dir, &source);
        let request = ConversionRequest::new(source, destination);

        let error = match convert_image(&request, config) {
            Ok(()) => None,
            Err(e) => {
                log::error!("Error processing {}: {}", request.source.display(), e);
                Some(e.to_string())
            }
        };

        on_progress(&Progress {
            index: i + 1,
            total,
            source: &request.source,
            destination: &request.destination,
            error: error.as_deref(),
        });

        report.add(FileResult {
            source: request.source,
            destination: request.destination,
            error,
        });
    }

    Ok(report)
}
