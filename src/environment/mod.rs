//! Checks against the user's ruby environment.
//!
//! - [`ruby_env`] - compares the cached `~/.chef/ruby-env.json` build
//!   version with the installed one
//! - [`ruby_path`] - checks whether the `ruby` on `PATH` is the embedded one
//!
//! Both checks answer `false` when they cannot decide.

pub mod ruby_env;
pub mod ruby_path;

pub use ruby_env::{ruby_env_path, versions_match, versions_match_at, RubyEnv};
pub use ruby_path::{
    absolute_ruby_path_in, is_default_chef_ruby, is_default_chef_ruby_in, is_executable,
    resolve_executable, search_path,
};
