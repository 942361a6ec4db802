//! Post repository.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Post, RawPost};
use crate::domain::errors::ClientError;
use crate::domain::ports::SnippetApi;

/// Resolves the code attachments of posts.
#[derive(Clone)]
pub struct PostRepository {
    snippets: Arc<dyn SnippetApi>,
}

impl PostRepository {
    /// Creates repository.
    #[must_use]
    pub fn new(snippets: Arc<dyn SnippetApi>) -> Self {
        Self { snippets }
    }

    /// Downloads the post's snippet, if it has one, and infers its language.
    ///
    /// # Errors
    /// Propagates the download error.
    pub async fn hydrate(&self, raw: RawPost) -> Result<Post, ClientError> {
        let Some(code_url) = raw.code_url.clone() else {
            return Ok(Post::from_raw(raw, None, None));
        };

        debug!(post_id = raw.id, "Resolving post snippet");
        let language = language_from_url(&code_url).map(str::to_string);
        let code = self.snippets.fetch_code(code_url).await.map_err(|e| {
            warn!(post_id = raw.id, error = %e, "Failed to download snippet");
            e
        })?;

        Ok(Post::from_raw(raw, Some(code), language))
    }

    /// Hydrates a page of posts in order, stopping at the first failure.
    ///
    /// # Errors
    /// Propagates the first download error.
    pub async fn hydrate_all(&self, raws: Vec<RawPost>) -> Result<Vec<Post>, ClientError> {
        let mut posts = Vec::with_capacity(raws.len());
        for raw in raws {
            posts.push(self.hydrate(raw).await?);
        }
        Ok(posts)
    }
}

/// Maps a snippet URL's file extension to a language name.
#[must_use]
pub fn language_from_url(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next()?;
    let file = path.rsplit('/').next()?;
    let (stem, extension) = file.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }

    let language = match extension.to_ascii_lowercase().as_str() {
        "rs" => "rust",
        "kt" | "kts" => "kotlin",
        "java" => "java",
        "py" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "tsx" => "tsx",
        "go" => "go",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "sh" | "bash" => "bash",
        "sql" => "sql",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "md" => "markdown",
        _ => return None,
    };
    Some(language)
}
