//! Input manager for resumes and job descriptions

use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::processing::resume::Resume;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load a resume from a JSON file. Any valid JSON yields a resume;
    /// unexpected shapes are coerced rather than rejected.
    pub async fn load_resume(&mut self, path: &Path) -> Result<Resume> {
        match self.detect_file_type(path)? {
            FileType::Json => {}
            other => {
                return Err(AtsError::UnsupportedFormat(format!(
                    "Resume must be a JSON file, got {:?}: {}",
                    other,
                    path.display()
                )))
            }
        }

        let content = self.read_cached(path, |path| async move {
            info!("Reading resume JSON: {}", path.display());
            tokio::fs::read_to_string(&path)
                .await
                .map_err(AtsError::from)
        })
        .await?;

        Resume::from_json_str(&content)
    }

    /// Extract plain text from a job description (TXT, Markdown or PDF).
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let file_type = self.detect_file_type(path)?;
        if !file_type.is_document() {
            return Err(AtsError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        self.read_cached(path, |path| async move {
            match file_type {
                FileType::Pdf => {
                    info!("Extracting text from PDF: {}", path.display());
                    PdfExtractor.extract(&path).await
                }
                FileType::Markdown => {
                    info!("Processing markdown file: {}", path.display());
                    MarkdownExtractor.extract(&path).await
                }
                _ => {
                    info!("Reading plain text file: {}", path.display());
                    PlainTextExtractor.extract(&path).await
                }
            }
        })
        .await
    }

    async fn read_cached<F, Fut>(&mut self, path: &Path, read: F) -> Result<String>
    where
        F: FnOnce(std::path::PathBuf) -> Fut,
        Fut: std::future::Future<Output = Result<String>>,
    {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = read(path.to_path_buf()).await?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            AtsError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
