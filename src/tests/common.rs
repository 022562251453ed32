use crate::config::CATALOG_ENV;
use crate::platform::Platform;
use once_cell::sync::Lazy;
use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Guards environment variables so catalog lookup resolves inside a temporary sandbox.
pub struct ConfigHomeGuard {
    _lock: MutexGuard<'static, ()>,
    temp: tempfile::TempDir,
    prev_xdg: Option<OsString>,
    prev_home: Option<OsString>,
    prev_catalog: Option<OsString>,
}

impl ConfigHomeGuard {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let lock = lock_env();
        let temp = tempfile::tempdir().expect("create test tempdir");
        let config_home = temp.path().join("config-home");
        std::fs::create_dir_all(&config_home).expect("create config-home dir");

        let prev_xdg = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", config_home.as_os_str());

        let prev_home = env::var_os("HOME");
        env::set_var("HOME", temp.path());

        let prev_catalog = env::var_os(CATALOG_ENV);
        env::remove_var(CATALOG_ENV);

        Self { _lock: lock, temp, prev_xdg, prev_home, prev_catalog }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }
}

impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        restore_env("XDG_CONFIG_HOME", &self.prev_xdg);
        restore_env("HOME", &self.prev_home);
        restore_env(CATALOG_ENV, &self.prev_catalog);
    }
}

fn restore_env(key: &str, previous: &Option<OsString>) {
    match previous {
        Some(val) => env::set_var(key, val),
        None => env::remove_var(key),
    }
}

pub fn platforms(pairs: &[(&str, &str)]) -> Vec<Platform> {
    pairs.iter().map(|(os, arch)| Platform::new(*os, *arch)).collect()
}
