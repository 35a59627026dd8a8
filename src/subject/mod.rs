//! Subjects and their recordings
//!
//! A [`RecordingCollection`] is the immutable input of a cross-validation run:
//! every subject with the sessions recorded for it. Folds are computed over
//! subject ids only; recordings come back in through [`RecordingCollection::resolve`].

mod collection;
mod id;


pub use collection::{
    Recording, RecordingCollection, SplitView, Subject, SubjectGroup, DEFAULT_EXTENSIONS,
};
pub use id::{subject_ids, SubjectId};
