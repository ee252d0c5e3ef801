//! # In-Memory Storage Service
//!
//! Sole owner of all entity state: students, courses, and the many-to-many
//! enrollment relation between them. Exposes CRUD, relation queries, and
//! reset/seed lifecycle operations over a plain in-process store.

pub mod collection;
pub mod errors;
pub mod records;
pub mod store;

pub use collection::{Collection, Record};
pub use errors::{StorageError, StorageResult};
pub use records::{Course, CoursePatch, Enrollment, NewCourse, NewStudent, Student, StudentPatch};
pub use store::Store;
