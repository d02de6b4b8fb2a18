pub mod collection;
pub mod resolve;
pub mod system;

pub use collection::{
    CatalogEntry, CollectionError, FetchError, PackageCollection, PinnedCollection,
    ResolvedPackage,
};
pub use resolve::{resolve, Resolution, ResolveError, ResolvedArtifact, ResolvedShell};
pub use system::platform::{Arch, Os, System};
