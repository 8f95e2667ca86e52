use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{debug, error, info};

/// What a change has to touch to count
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    Dir(PathBuf),
}

/// Directories handed to `notify` and the paths inside them that matter.
///
/// Files are watched through their parent directory. Editors that save by
/// writing a temporary file and renaming it over the original replace the
/// inode, which a watch on the file itself does not survive.
#[derive(Debug, Default)]
pub struct WatchSet {
    dirs: Vec<PathBuf>,
    targets: Vec<Target>,
}

impl WatchSet {
    pub fn new(paths: &[PathBuf]) -> Self {
        let mut set = Self::default();

        for path in paths {
            let path = absolute(path);
            if path.is_dir() {
                set.add_dir(path.clone());
                set.targets.push(Target::Dir(path));
                continue;
            }

            match path.parent().filter(|p| p.is_dir()) {
                Some(parent) => {
                    set.add_dir(parent.to_path_buf());
                    set.targets.push(Target::File(path));
                }
                None => tracing::warn!("Path does not exist, skipping: {}", path.display()),
            }
        }

        set
    }

    fn add_dir(&mut self, dir: PathBuf) {
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_relevant(&self, path: &Path) -> bool {
        self.targets.iter().any(|target| match target {
            Target::File(file) => path == file,
            Target::Dir(dir) => path.starts_with(dir),
        })
    }

    /// Whether `event` changed one of the targets; reads never count
    pub fn touches(&self, event: &Event) -> bool {
        !matches!(event.kind, EventKind::Access(_))
            && event.paths.iter().any(|p| self.is_relevant(p))
    }
}

/// Canonical form of `path`, also for a file that does not exist yet
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// Calls `on_change` whenever one of the watched files changes.
///
/// Watching stops when the value is dropped.
pub struct PreviewWatcher {
    _watcher: RecommendedWatcher,
}

impl PreviewWatcher {
    pub fn new<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        let set = WatchSet::new(&paths);
        for dir in set.dirs() {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
            info!("Watching {}", dir.display());
        }

        std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Ok(event)) => {
                    if !set.touches(&event) {
                        debug!("Ignoring {:?} on {:?}", event.kind, event.paths);
                        continue;
                    }
                    // Editors often write in several steps
                    std::thread::sleep(Duration::from_millis(100));
                    while rx.try_recv().is_ok() {}
                    info!("Change detected, re-rendering...");
                    on_change();
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(_) => break,
            }
        });

        Ok(Self { _watcher: watcher })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RenameMode};
    use std::fs;
    use tempfile::TempDir;

    fn event(kind: EventKind, path: PathBuf) -> Event {
        Event::new(kind).add_path(path)
    }

    #[test]
    fn test_files_are_watched_through_their_parent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::write(root.join("sdk.schema"), "{}").unwrap();
        fs::write(root.join("field.yaml"), "{}").unwrap();

        let set = WatchSet::new(&[root.join("sdk.schema"), root.join("field.yaml")]);
        assert_eq!(set.dirs(), &[root.clone()]);
        assert!(set.is_relevant(&root.join("sdk.schema")));
        assert!(!set.is_relevant(&root.join("sdk.schema.swp")));
    }

    #[test]
    fn test_rename_over_target_is_relevant() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::write(root.join("field.yaml"), "{}").unwrap();
        let set = WatchSet::new(&[root.join("field.yaml")]);

        let renamed = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
            .add_path(root.join("field.yaml~"))
            .add_path(root.join("field.yaml"));
        assert!(set.touches(&renamed));

        let created = event(EventKind::Create(CreateKind::File), root.join(".field.yaml.tmp"));
        assert!(!set.touches(&created));
    }

    #[test]
    fn test_directory_targets_cover_their_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("overrides")).unwrap();

        let set = WatchSet::new(&[root.join("overrides")]);
        assert_eq!(set.dirs(), &[root.join("overrides")]);
        assert!(set.touches(&event(
            EventKind::Create(CreateKind::File),
            root.join("overrides/prompt.yaml")
        )));
        assert!(!set.is_relevant(&root.join("other.yaml")));
    }

    #[test]
    fn test_reads_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::write(root.join("sdk.schema"), "{}").unwrap();
        let set = WatchSet::new(&[root.join("sdk.schema")]);

        assert!(!set.touches(&event(EventKind::Access(AccessKind::Any), root.join("sdk.schema"))));
    }

    #[test]
    fn test_missing_parent_is_skipped() {
        let set = WatchSet::new(&[PathBuf::from("/nonexistent/dir/sdk.schema")]);
        assert!(set.dirs().is_empty());
    }
}
