//! Recording collections grouped by subject

use super::id::SubjectId;
use crate::cv::Split;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File extensions recognised when no explicit list is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[".edf", ".fif"];

/// One recording session of a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recording {
    /// Session identifier, unique within a subject
    pub session_id: String,
    /// Location of the session file
    pub path: PathBuf,
}

impl Recording {
    /// Create a recording whose session id is the file name of `path`
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { session_id, path }
    }
}

/// A subject and the recordings it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: SubjectId,
    /// Ordered by session id
    pub recordings: Vec<Recording>,
}

impl Subject {
    fn new(id: SubjectId, mut recordings: Vec<Recording>) -> Self {
        recordings.sort_by(|a, b| a.session_id.cmp(&b.session_id));
        Self { id, recordings }
    }
}

/// Every subject known to a cross-validation run, sorted by id.
///
/// The sorted order is the one [`subject_ids`](Self::subject_ids) returns, so
/// fold assignment over a collection is reproducible regardless of the order
/// recordings were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCollection {
    subjects: Vec<Subject>,
}

impl RecordingCollection {
    /// Build from a `subject -> session files` mapping.
    ///
    /// A subject listed twice is rejected rather than merged.
    pub fn from_mapping<I, S, P>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<P>)>,
        S: Into<SubjectId>,
        P: Into<PathBuf>,
    {
        let mut grouped: BTreeMap<SubjectId, Vec<Recording>> = BTreeMap::new();
        for (subject, sessions) in mapping {
            let subject = subject.into();
            if grouped.contains_key(&subject) {
                return Err(Error::DuplicateSubject(subject));
            }
            let recordings = sessions.into_iter().map(Recording::from_path).collect();
            grouped.insert(subject, recordings);
        }
        Ok(Self::from_grouped(grouped))
    }

    /// Group already-listed session files by subject.
    ///
    /// Files are expected at `<toplevel>/[...]/<subject>/<session>.<ext>`:
    /// the subject is the name of the parent directory. Files without a
    /// parent directory are skipped.
    pub fn from_session_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut grouped: BTreeMap<SubjectId, Vec<Recording>> = BTreeMap::new();
        for path in paths {
            let path = path.as_ref();
            let Some(subject) = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| SubjectId::new(name.to_string_lossy()))
            else {
                tracing::warn!(path = %path.display(), "session file has no subject directory, skipping");
                continue;
            };
            grouped
                .entry(subject)
                .or_default()
                .push(Recording::from_path(path));
        }
        tracing::debug!(subjects = grouped.len(), "grouped session files by subject");
        Self::from_grouped(grouped)
    }

    /// Like [`from_session_paths`](Self::from_session_paths), keeping only
    /// files whose final extension (with the dot, e.g. `.edf`) is listed.
    pub fn from_session_paths_with_extensions<I, P, E>(paths: I, extensions: &[E]) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        E: AsRef<str>,
    {
        let kept = paths.into_iter().filter(|path| {
            path.as_ref()
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .is_some_and(|ext| extensions.iter().any(|allowed| allowed.as_ref() == ext))
        });
        Self::from_session_paths(kept)
    }

    fn from_grouped(grouped: BTreeMap<SubjectId, Vec<Recording>>) -> Self {
        let subjects = grouped
            .into_iter()
            .map(|(id, recordings)| Subject::new(id, recordings))
            .collect();
        Self { subjects }
    }

    /// Drop excluded subjects and excluded sessions.
    ///
    /// Subjects whose every session was excluded are dropped too.
    pub fn with_exclusions<S: AsRef<str>>(self, people: &[S], sessions: &[S]) -> Self {
        let subjects: Vec<Subject> = self
            .subjects
            .into_iter()
            .filter(|subject| !people.iter().any(|p| p.as_ref() == subject.id.as_str()))
            .filter_map(|mut subject| {
                subject
                    .recordings
                    .retain(|rec| !sessions.iter().any(|s| s.as_ref() == rec.session_id));
                (!subject.recordings.is_empty()).then_some(subject)
            })
            .collect();
        Self { subjects }
    }

    /// Subject ids in collection order
    pub fn subject_ids(&self) -> Vec<SubjectId> {
        self.subjects.iter().map(|s| s.id.clone()).collect()
    }

    /// Look up a subject by id
    pub fn get(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects
            .binary_search_by(|s| s.id.cmp(id))
            .ok()
            .map(|idx| &self.subjects[idx])
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Total number of recordings across all subjects
    pub fn recording_count(&self) -> usize {
        self.subjects.iter().map(|s| s.recordings.len()).sum()
    }

    /// Borrow the subjects named by `ids`, in the order given
    pub fn group(&self, ids: &[SubjectId]) -> Result<SubjectGroup<'_>> {
        let subjects = ids
            .iter()
            .map(|id| self.get(id).ok_or_else(|| Error::UnknownSubject(id.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(SubjectGroup { subjects })
    }

    /// Resolve a split's id sets into recording views
    pub fn resolve(&self, split: &Split) -> Result<SplitView<'_>> {
        Ok(SplitView {
            fold: split.fold,
            training: self.group(&split.training)?,
            validation: self.group(&split.validation)?,
            test: self.group(&split.test)?,
        })
    }
}

/// Borrowed view over a set of subjects and their recordings
#[derive(Debug, Clone, Default)]
pub struct SubjectGroup<'a> {
    subjects: Vec<&'a Subject>,
}

impl<'a> SubjectGroup<'a> {
    pub fn subjects(&self) -> &[&'a Subject] {
        &self.subjects
    }

    pub fn ids(&self) -> Vec<SubjectId> {
        self.subjects.iter().map(|s| s.id.clone()).collect()
    }

    /// All recordings of the group, subject by subject
    pub fn recordings(&self) -> impl Iterator<Item = &'a Recording> + '_ {
        self.subjects.iter().copied().flat_map(|s| s.recordings.iter())
    }

    pub fn recording_count(&self) -> usize {
        self.subjects.iter().map(|s| s.recordings.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// A split resolved against a [`RecordingCollection`]
#[derive(Debug, Clone)]
pub struct SplitView<'a> {
    pub fold: usize,
    pub training: SubjectGroup<'a>,
    pub validation: SubjectGroup<'a>,
    pub test: SubjectGroup<'a>,
}
