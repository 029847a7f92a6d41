//! Concurrent loading of several CSV files into frames.
//!
//! A [`FrameLoader`] builds a dedicated rayon pool of at most
//! [`LoaderConfig::workers`] threads (never more than there are files).
//! Every file is queued as a `(position, path)` job on a channel that is
//! closed once fully enqueued; workers pull jobs until the queue is drained
//! and send `(position, path, result)` back on a result channel. The caller
//! blocks until the pool finishes, then re-projects the results into input
//! order.
//!
//! Every file is attempted. If any fail, the error of the earliest failing
//! file in input order is returned as [`FrameError::LoadFailed`].
//!
//! ```no_run
//! use csvframe::load_frames;
//!
//! # fn main() -> csvframe::FrameResult<()> {
//! let frames = load_frames("data", &["January", "February", "March"])?;
//! assert_eq!(frames.len(), 3);
//! # Ok(())
//! # }
//! ```

use crate::config::LoaderConfig;
use crate::error::{FrameError, FrameResult};
use crate::frame::DataFrame;
use crate::io::csv::{normalize_file_name, read_frame_path};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};

const MIN_FILES: usize = 2;

type LoadResult<'a> = (usize, &'a Path, FrameResult<DataFrame>);

/// Loads batches of CSV files on a bounded worker pool.
#[derive(Clone, Debug, Default)]
pub struct FrameLoader {
    config: LoaderConfig,
}

impl FrameLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load `file_names` from `dir`, returning frames in the same order.
    ///
    /// Names get `.csv` appended as in [`read_frame`](crate::read_frame).
    ///
    /// # Errors
    /// See [`load_paths`](Self::load_paths).
    pub fn load<S: AsRef<str>>(
        &self,
        dir: impl AsRef<Path>,
        file_names: &[S],
    ) -> FrameResult<Vec<DataFrame>> {
        let dir = dir.as_ref();
        let paths: Vec<PathBuf> = file_names
            .iter()
            .map(|name| dir.join(normalize_file_name(name.as_ref())))
            .collect();
        self.load_paths(&paths)
    }

    /// Load every file matching `pattern`, in sorted path order.
    ///
    /// # Errors
    /// [`FrameError::Glob`] for a bad pattern, otherwise see
    /// [`load_paths`](Self::load_paths).
    #[cfg(feature = "io-glob")]
    pub fn load_glob(&self, pattern: &str) -> FrameResult<Vec<DataFrame>> {
        let paths = crate::io::glob::expand_glob(pattern)?;
        self.load_paths(&paths)
    }

    /// Load `paths` concurrently, returning frames in the same order.
    ///
    /// # Errors
    /// - [`FrameError::InsufficientInput`] for fewer than two paths.
    /// - [`FrameError::InvalidArgument`] for a zero worker count.
    /// - [`FrameError::ThreadPool`] if the pool cannot be built.
    /// - [`FrameError::LoadFailed`] for the first failing path in input
    ///   order.
    pub fn load_paths(&self, paths: &[PathBuf]) -> FrameResult<Vec<DataFrame>> {
        let n = paths.len();
        if n < MIN_FILES {
            return Err(FrameError::InsufficientInput {
                required: MIN_FILES,
                found: n,
            });
        }
        self.config.validate()?;
        let workers = self.config.workers.min(n);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("csvframe-loader-{i}"))
            .build()?;

        let (job_tx, job_rx) = mpsc::channel::<(usize, &Path)>();
        for (pos, path) in paths.iter().enumerate() {
            job_tx
                .send((pos, path.as_path()))
                .map_err(|_| FrameError::LookupError("job queue closed early".to_string()))?;
        }
        drop(job_tx);
        let job_rx = Mutex::new(job_rx);

        let (result_tx, result_rx) = mpsc::channel::<LoadResult<'_>>();
        pool.scope(|s| {
            for worker in 0..workers {
                let result_tx = result_tx.clone();
                let job_rx = &job_rx;
                s.spawn(move |_| {
                    loop {
                        let job = match job_rx.lock() {
                            Ok(rx) => rx.recv(),
                            Err(_) => break,
                        };
                        let Ok((pos, path)) = job else { break };
                        debug!(worker, file = %path.display(), "loading file");
                        let result = read_frame_path(path);
                        if result_tx.send((pos, path, result)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<FrameResult<DataFrame>>> = (0..n).map(|_| None).collect();
        for (pos, path, result) in result_rx {
            if let Err(e) = &result {
                warn!(file = %path.display(), error = %e, "file failed to load");
            }
            slots[pos] = Some(result);
        }

        let mut frames = Vec::with_capacity(n);
        for (slot, path) in slots.into_iter().zip(paths) {
            match slot {
                Some(Ok(df)) => frames.push(df),
                Some(Err(source)) => {
                    return Err(FrameError::LoadFailed {
                        file: path.clone(),
                        source: Box::new(source),
                    });
                }
                None => {
                    return Err(FrameError::LookupError(format!(
                        "no result for {}",
                        path.display()
                    )));
                }
            }
        }

        info!(files = n, workers, "loaded frame batch");
        Ok(frames)
    }
}

/// Load `file_names` from `dir` with the default configuration.
///
/// # Errors
/// See [`FrameLoader::load_paths`].
pub fn load_frames<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    file_names: &[S],
) -> FrameResult<Vec<DataFrame>> {
    FrameLoader::default().load(dir, file_names)
}

/// Load every file matching `pattern` with the default configuration.
///
/// # Errors
/// See [`FrameLoader::load_glob`].
#[cfg(feature = "io-glob")]
pub fn load_glob(pattern: &str) -> FrameResult<Vec<DataFrame>> {
    FrameLoader::default().load_glob(pattern)
}
