pub mod platform;

pub use platform::{Arch, Os, System};
