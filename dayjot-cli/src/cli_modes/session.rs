//! Runs `$EDITOR` on a scratch copy of the draft and feeds every change it
//! saves into the draft store, which writes once the buffer has been quiet
//! for the configured quiescence period.

use super::editor_utils::spawn_editor;
use anyhow::{Context, Result, bail};
use dayjot_core::{DraftStorage, DraftStore};
use std::{
    fs,
    io::ErrorKind,
    path::Path,
    process::Child,
    thread,
    time::{Duration, Instant},
};

pub struct SessionOptions<'a> {
    pub editor: &'a str,
    pub poll_interval: Duration,
    pub flush_on_close: bool,
}

#[derive(Debug, Default)]
pub struct SessionOutcome {
    /// Content of the buffer when the editor closed.
    pub content: String,
    /// How many times the draft was written.
    pub saves: usize,
    /// A change was still waiting for the timer when the session ended.
    pub discarded: bool,
}

/// Runs one editor session over an already opened store.
///
/// The store is closed when the session ends, whatever the outcome.
pub fn run_session<S: DraftStorage>(
    drafts: &mut DraftStore<S>,
    options: &SessionOptions,
) -> Result<SessionOutcome> {
    let buffer = tempfile::Builder::new()
        .prefix("dayjot")
        .suffix(".md")
        .tempfile()
        .context("creating editor buffer")?;
    let path = buffer.path();
    fs::write(path, drafts.content())
        .with_context(|| format!("seeding editor buffer {}", path.display()))?;

    let result = watch_editor(drafts, path, options);
    let discarded = drafts.close();
    let mut outcome = result?;
    outcome.discarded = discarded;
    Ok(outcome)
}

fn watch_editor<S: DraftStorage>(
    drafts: &mut DraftStore<S>,
    path: &Path,
    options: &SessionOptions,
) -> Result<SessionOutcome> {
    let mut last_seen = drafts.content().to_string();
    let mut saves = 0;
    let mut editor = EditorProcess(spawn_editor(options.editor, path)?);
    tracing::debug!(editor = options.editor, path = %path.display(), "editor started");

    let status = loop {
        let exited = editor.0.try_wait().context("waiting for editor")?;
        let now = Instant::now();
        if let Some(current) = read_buffer(path)? {
            if current != last_seen {
                drafts.edit(current.as_str(), now);
                last_seen = current;
            }
        }
        if drafts.poll(now)?.is_some() {
            saves += 1;
        }
        if let Some(status) = exited {
            break status;
        }
        thread::sleep(next_wake(drafts.next_deadline(), now, options.poll_interval));
    };

    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    if options.flush_on_close && drafts.flush()?.is_some() {
        saves += 1;
    }

    Ok(SessionOutcome {
        content: last_seen,
        saves,
        discarded: false,
    })
}

/// Kills the editor if the session ends while it is still running, so it
/// never outlives its buffer.
struct EditorProcess(Child);

impl Drop for EditorProcess {
    fn drop(&mut self) {
        if let Ok(None) = self.0.try_wait() {
            tracing::warn!(pid = self.0.id(), "stopping editor");
            if let Err(e) = self.0.kill() {
                tracing::debug!(error = %e, "could not kill editor");
            }
            let _ = self.0.wait();
        }
    }
}

/// Current buffer text. `None` while an editor is swapping the file in.
fn read_buffer(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading editor buffer {}", path.display())),
    }
}

/// Sleeps until the next tick, or sooner if a write falls due first.
fn next_wake(deadline: Option<Instant>, now: Instant, interval: Duration) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(interval),
        None => interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayjot_core::{DateKey, MemoryStorage};

    fn opened_store(initial: Option<&str>) -> DraftStore<MemoryStorage> {
        let key = DateKey::parse("2024-03-15").unwrap();
        let mut storage = MemoryStorage::new();
        if let Some(text) = initial {
            storage.save(&key, text).unwrap();
        }
        open_with(storage, Duration::from_millis(1000))
    }

    fn open_with<S: DraftStorage>(storage: S, quiescence: Duration) -> DraftStore<S> {
        let mut drafts = DraftStore::new(storage, quiescence);
        drafts.open(DateKey::parse("2024-03-15")).unwrap();
        drafts
    }

    #[cfg(unix)]
    struct FullDisk;

    #[cfg(unix)]
    impl DraftStorage for FullDisk {
        fn load(&self, _: &DateKey) -> Result<Option<String>> {
            Ok(None)
        }
        fn save(&mut self, _: &DateKey, _: &str) -> Result<()> {
            Err(anyhow::anyhow!("quota exceeded"))
        }
        fn keys(&self) -> Result<Vec<DateKey>> {
            Ok(Vec::new())
        }
    }

    /// An "editor" that types `text`, stays open for `seconds`, then touches `marker`.
    #[cfg(unix)]
    fn slow_editor(dir: &Path, text: &str, seconds: u32, marker: &Path) -> String {
        let script = dir.join("editor.sh");
        fs::write(
            &script,
            format!(
                "printf '%s' '{text}' > \"$1\"\nsleep {seconds}\ntouch '{}'\n",
                marker.display()
            ),
        )
        .unwrap();
        format!("sh {}", script.display())
    }

    #[test]
    fn next_wake_never_oversleeps_a_deadline() {
        let now = Instant::now();
        let tick = Duration::from_millis(200);
        assert_eq!(next_wake(None, now, tick), tick);
        assert_eq!(
            next_wake(Some(now + Duration::from_millis(50)), now, tick),
            Duration::from_millis(50)
        );
        assert_eq!(next_wake(Some(now + Duration::from_secs(5)), now, tick), tick);
        assert_eq!(next_wake(Some(now), now + tick, tick), Duration::ZERO);
    }

    #[test]
    fn missing_buffer_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_buffer(&tmp.path().join("gone.md")).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn untouched_buffer_writes_nothing() {
        let mut drafts = opened_store(Some("Had a good day"));
        let options = SessionOptions {
            editor: "true",
            poll_interval: Duration::from_millis(10),
            flush_on_close: true,
        };
        let outcome = run_session(&mut drafts, &options).unwrap();
        assert_eq!(outcome.content, "Had a good day");
        assert_eq!(outcome.saves, 0);
        assert!(!outcome.discarded);
        assert_eq!(drafts.storage().writes(), 1);
        assert_eq!(drafts.date(), None);
    }

    /// An "editor" that replaces the buffer with `text` and exits right away.
    #[cfg(unix)]
    fn copying_editor(dir: &Path, text: &str) -> String {
        let source = dir.join("typed.md");
        fs::write(&source, text).unwrap();
        format!("cp {}", source.display())
    }

    #[cfg(unix)]
    #[test]
    fn change_on_exit_is_flushed_when_configured() {
        let tmp = tempfile::tempdir().unwrap();
        let editor = copying_editor(tmp.path(), "Had a good day");
        let mut drafts = opened_store(None);
        let options = SessionOptions {
            editor: &editor,
            poll_interval: Duration::from_millis(10),
            flush_on_close: true,
        };

        let outcome = run_session(&mut drafts, &options).unwrap();
        assert_eq!(outcome.content, "Had a good day");
        assert_eq!(outcome.saves, 1);
        assert!(!outcome.discarded);
        let key = DateKey::parse("2024-03-15").unwrap();
        assert_eq!(
            drafts.storage().load(&key).unwrap().as_deref(),
            Some("Had a good day")
        );
    }

    #[cfg(unix)]
    #[test]
    fn change_on_exit_is_dropped_without_flush() {
        let tmp = tempfile::tempdir().unwrap();
        let editor = copying_editor(tmp.path(), "Had a good day");
        let mut drafts = opened_store(None);
        let options = SessionOptions {
            editor: &editor,
            poll_interval: Duration::from_millis(10),
            flush_on_close: false,
        };

        let outcome = run_session(&mut drafts, &options).unwrap();
        assert_eq!(outcome.saves, 0);
        assert!(outcome.discarded);
        assert_eq!(drafts.storage().writes(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error_and_closes_the_store() {
        let mut drafts = opened_store(None);
        let options = SessionOptions {
            editor: "false",
            poll_interval: Duration::from_millis(10),
            flush_on_close: true,
        };
        assert!(run_session(&mut drafts, &options).is_err());
        assert_eq!(drafts.date(), None);
    }

    #[cfg(unix)]
    #[test]
    fn quiet_buffer_is_saved_while_the_editor_is_open() {
        let tmp = tempfile::tempdir().unwrap();
        let marker = tmp.path().join("closed");
        let editor = slow_editor(tmp.path(), "Had a good day", 1, &marker);
        let mut drafts = open_with(MemoryStorage::new(), Duration::from_millis(200));
        let options = SessionOptions {
            editor: &editor,
            poll_interval: Duration::from_millis(10),
            flush_on_close: false,
        };

        let outcome = run_session(&mut drafts, &options).unwrap();
        assert!(marker.exists());
        assert_eq!(outcome.saves, 1);
        assert!(!outcome.discarded);
        let key = DateKey::parse("2024-03-15").unwrap();
        assert_eq!(
            drafts.storage().load(&key).unwrap().as_deref(),
            Some("Had a good day")
        );
    }

    #[cfg(unix)]
    #[test]
    fn failed_save_stops_the_editor() {
        let tmp = tempfile::tempdir().unwrap();
        let marker = tmp.path().join("closed");
        let editor = slow_editor(tmp.path(), "too much", 1, &marker);
        let mut drafts = open_with(FullDisk, Duration::from_millis(20));
        let options = SessionOptions {
            editor: &editor,
            poll_interval: Duration::from_millis(10),
            flush_on_close: true,
        };

        let started = Instant::now();
        let err = run_session(&mut drafts, &options).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert!(started.elapsed() < Duration::from_millis(900));
        assert_eq!(drafts.date(), None);

        // A surviving editor would touch the marker after its sleep.
        thread::sleep(Duration::from_millis(1500));
        assert!(!marker.exists());
    }
}
