//! Chat subcommand: send text or an image to the study-coach proxy.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use studycoach_core::storage::Config;
use studycoach_core::{ChatClient, ChatMessage};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Ask the coach a question
    Send {
        /// Question text
        message: String,
    },
    /// Ask the coach about an image (worksheet, problem photo)
    Image {
        /// Image file path
        path: PathBuf,
        /// Question about the image
        #[arg(long, default_value = "Please explain this.")]
        prompt: String,
    },
    /// Check proxy liveness and configuration
    Health,
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let client = ChatClient::new(&config.proxy_config())?;
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        ChatAction::Send { message } => {
            let reply = runtime.block_on(client.send_text(&[ChatMessage::user(message)]))?;
            println!("{reply}");
        }
        ChatAction::Image { path, prompt } => {
            let image = std::fs::read(&path)?;
            let mime = mime_for(&path);
            let reply = runtime.block_on(client.send_image(image, mime, &prompt))?;
            println!("{reply}");
        }
        ChatAction::Health => {
            let status = runtime.block_on(client.health())?;
            let model = status.model.as_deref().unwrap_or("unknown");
            println!(
                "ok: {}  key configured: {}  model: {model}",
                status.ok, status.has_key
            );
        }
    }
    Ok(())
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_mapped_from_the_extension() {
        assert_eq!(mime_for(Path::new("sheet.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("scan")), "application/octet-stream");
    }
}
