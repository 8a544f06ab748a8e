//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use devtoolbox::config::{Config, ConfigStore, GenerationConfig};
use devtoolbox::generation::TextGenerator;
use devtoolbox::tools::Outcome;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Environment variable that is never set, so only `api_key` counts.
pub const UNSET_KEY_ENV: &str = "DEVTOOLBOX_TEST_KEY_NEVER_SET";

/// Config pointing at `base_url` with an optional direct key.
pub fn generation_store(base_url: &str, api_key: Option<&str>) -> ConfigStore {
    let config = Config {
        generation: GenerationConfig {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            api_key_env: UNSET_KEY_ENV.to_string(),
            ..GenerationConfig::default()
        },
        ..Config::default()
    };
    ConfigStore::new(config, PathBuf::from("/tmp/devtoolbox-test.toml"))
}

/// Test double that counts calls and echoes the prompt back.
#[derive(Default)]
pub struct CountingGenerator {
    calls: AtomicUsize,
}

impl CountingGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for CountingGenerator {
    async fn generate(&self, prompt: &str) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Outcome::Success(format!("echo: {}", prompt))
    }
}
