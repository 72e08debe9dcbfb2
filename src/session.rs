use crate::config::Config;
use crate::constants::{DOWNLOAD_FILE_NAME, HEADSHOT_PROMPT};
use crate::error::{GenerationError, ProfileError};
use crate::gemini::edit_image;
use crate::image::{read_image, ImageData};
use reqwest::Client;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Headshot,
    Custom(String),
}

impl Prompt {
    pub fn text(&self) -> &str {
        match self {
            Prompt::Headshot => HEADSHOT_PROMPT,
            Prompt::Custom(text) => text,
        }
    }

    fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }
}

/// A single edit handed out by [`Session::begin`].
#[derive(Debug, Clone)]
pub struct EditJob {
    pub base: ImageData,
    pub prompt: String,
}

/// In-memory state of one editing session: the uploaded photo, the latest
/// result and the status of the last generation.
#[derive(Debug, Default)]
pub struct Session {
    original: Option<ImageData>,
    generated: Option<ImageData>,
    status: GenerationStatus,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> Option<&ImageData> {
        self.original.as_ref()
    }

    pub fn generated(&self) -> Option<&ImageData> {
        self.generated.as_ref()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the photo and forgets any previous result.
    pub fn upload(&mut self, image: ImageData) {
        log::info!("uploaded {} image", image.mime_type());
        self.original = Some(image);
        self.generated = None;
        self.error = None;
        self.status = GenerationStatus::Idle;
    }

    pub async fn upload_file(&mut self, path: &Path) -> Result<(), ProfileError> {
        let image = read_image(path).await?;
        self.upload(image);
        Ok(())
    }

    /// Image the next edit starts from: the last result, else the upload.
    pub fn base_image(&self) -> Option<&ImageData> {
        self.generated.as_ref().or(self.original.as_ref())
    }

    pub fn can_generate(&self, prompt: &Prompt) -> bool {
        self.original.is_some() && self.status != GenerationStatus::Generating && !prompt.is_blank()
    }

    /// Marks a generation as in flight. Returns `None` when nothing may start.
    pub fn begin(&mut self, prompt: &Prompt) -> Option<EditJob> {
        if !self.can_generate(prompt) {
            return None;
        }
        let base = self.base_image()?.clone();
        self.status = GenerationStatus::Generating;
        self.error = None;
        Some(EditJob {
            base,
            prompt: prompt.text().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<ImageData, GenerationError>) {
        match result {
            Ok(image) => {
                log::info!("generation succeeded ({})", image.mime_type());
                self.generated = Some(image);
                self.status = GenerationStatus::Succeeded;
            }
            Err(err) => {
                log::warn!("generation failed: {}", err);
                self.error = Some(err.user_message());
                self.status = GenerationStatus::Failed;
            }
        }
    }

    /// Runs one edit against the model. `None` means nothing was sent.
    pub async fn generate(
        &mut self,
        client: &Client,
        config: &Config,
        prompt: &Prompt,
    ) -> Option<GenerationStatus> {
        let job = self.begin(prompt)?;
        let result = edit_image(client, config, &job.base, &job.prompt).await;
        self.finish(result);
        Some(self.status)
    }

    /// Writes the current result, as received, into `dir`.
    pub async fn download(&self, dir: &Path) -> Result<PathBuf, ProfileError> {
        let image = self
            .generated
            .as_ref()
            .ok_or(ProfileError::NothingToDownload)?;
        let bytes = image.decode()?;
        let path = dir.join(DOWNLOAD_FILE_NAME);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| ProfileError::Download {
                path: path.clone(),
                source,
            })?;
        log::info!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
