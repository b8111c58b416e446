//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::PathBuf;
use std::time::Duration;

use crate::generator::Generator;
use crate::{Site, CONFIG_FILE};

/// Build the home page once
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let data = site.page_data()?;
    tracing::info!(
        "Loaded {} posts, showing up to {}",
        data.posts.len(),
        site.config.home.max_display
    );

    Generator::new(site)?.generate(&data)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}

/// Paths whose changes trigger a rebuild
pub fn watched_paths(site: &Site) -> Vec<PathBuf> {
    [
        site.content_dir.clone(),
        site.static_dir.clone(),
        site.base_dir.join(CONFIG_FILE),
    ]
    .into_iter()
    .filter(|p| p.exists())
    .collect()
}

/// Block the current thread, rebuilding whenever a watched file changes.
///
/// The site (including its configuration) is reopened on every change, and
/// `on_rebuilt` is called after each successful build.
pub fn watch_and_rebuild<F>(site: &Site, mut on_rebuilt: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for path in watched_paths(site) {
        let mode = if path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        debouncer.watcher().watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let path = e.path.to_string_lossy();
                        !path.contains(".git")
                            && !path.contains(".DS_Store")
                            && !path.ends_with('~')
                    })
                    .collect();
                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                let rebuilt = Site::new(&site.base_dir).and_then(|fresh| run(&fresh));
                match rebuilt {
                    Ok(()) => on_rebuilt(),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Ok(Err(e)) => tracing::error!("Watch error: {:?}", e),
            Err(_) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use crate::generator::INDEX_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_run_builds_initialized_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site).unwrap();

        let html = std::fs::read_to_string(site.public_dir.join(INDEX_FILE)).unwrap();
        assert!(html.contains("Hello World"));
        assert!(html.contains(r#"href="/blog/hello-world""#));
        assert!(html.contains(r#"href="/tags/welcome""#));
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_run_fails_without_author() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join("data/authors/default.md")).unwrap();
        let site = Site::new(dir.path()).unwrap();

        let err = run(&site).unwrap_err();
        assert!(format!("{:#}", err).contains("authors/default"));
        assert!(!site.public_dir.join(INDEX_FILE).exists());
    }

    #[test]
    fn test_run_fails_without_blog_directory() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        std::fs::remove_dir_all(dir.path().join("data/blog")).unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site).is_err());
    }

    #[test]
    fn test_watched_paths_only_existing() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(watched_paths(&site).len(), 3);

        std::fs::remove_dir_all(&site.static_dir).unwrap();
        assert_eq!(watched_paths(&site).len(), 2);
    }
}
