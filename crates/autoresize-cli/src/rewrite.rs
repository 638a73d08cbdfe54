use autoresize_engine::{
    IoError, MarkdownDocument, ResizeSettings, io, resize_images_in_content_with_report,
    resize_images_in_document,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub changed: usize,
    pub failed: usize,
    pub changed_files: Vec<PathBuf>,
}

impl Summary {
    /// 2 if any file failed, 1 if a dry run found changes, otherwise 0.
    pub fn exit_code(&self, dry_run: bool) -> i32 {
        if self.failed > 0 {
            2
        } else if dry_run && self.changed > 0 {
            1
        } else {
            0
        }
    }
}

pub fn process_files(files: &[PathBuf], settings: &ResizeSettings, dry_run: bool) -> Summary {
    let mut summary = Summary::default();

    for path in files {
        summary.processed += 1;
        match process_file(path, settings, dry_run) {
            Ok(true) => {
                summary.changed += 1;
                summary.changed_files.push(path.clone());
            }
            Ok(false) => log::debug!("No changes: {}", path.display()),
            Err(e) => {
                summary.failed += 1;
                log::error!("Failed to process {}: {e}", path.display());
            }
        }
    }

    summary
}

/// Returns whether the file changed (or would change, on a dry run).
fn process_file(path: &Path, settings: &ResizeSettings, dry_run: bool) -> Result<bool, IoError> {
    if dry_run {
        let content = io::read_file(path)?;
        let (new_content, report) = resize_images_in_content_with_report(&content, settings);
        let changed = new_content != content;
        if changed {
            log::info!(
                "Would resize {} image(s) in {}",
                report.total_images(),
                path.display()
            );
        }
        return Ok(changed);
    }

    let mut doc = MarkdownDocument::new(path);
    let changed = resize_images_in_document(&mut doc, settings)?;
    if changed {
        log::info!("Resized images in {}", doc.path().display());
    }
    Ok(changed)
}
