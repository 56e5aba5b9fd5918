//! Config infrastructure module

mod layered;
mod xdg;

pub use layered::LayeredConfigStore;
pub use xdg::XdgConfigStore;
