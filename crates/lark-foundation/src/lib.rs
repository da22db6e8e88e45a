//! Foundation elements for Lark: the field capability contract, host
//! invalidation plumbing, and archive restoration.

pub mod archive;
pub mod host;
pub mod text;

pub use archive::{Archive, ArchiveError, FromArchive};
pub use host::{BasicHostContext, HostContext, InvalidationKind};
pub use text::FloatingLabelField;

pub mod prelude {
    pub use crate::archive::{Archive, ArchiveError, FromArchive};
    pub use crate::host::{BasicHostContext, HostContext, InvalidationKind};
    pub use crate::text::FloatingLabelField;
}
