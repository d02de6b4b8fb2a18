pub mod theme;

pub use theme::{Icon, Theme};
