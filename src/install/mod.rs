//! Install location detection.
//!
//! Works out where the running binary was installed and whether that
//! location is a packaged ("omnibus") install or a local checkout.

pub mod root;

pub use root::{
    detect_install_kind, expected_install_root, expected_install_root_from, is_packaged_install,
    resolve_install_root, InstallKind,
};
