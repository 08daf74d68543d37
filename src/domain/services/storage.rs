use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Key-value storage where every key is one JSON file in `dir`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    pub dir: path::PathBuf,
}

impl Default for LocalStorage {
    fn default() -> LocalStorage {
        return LocalStorage::new(path::PathBuf::from(Config::get(ConfigKey::DataDir)));
    }
}

impl LocalStorage {
    pub fn new(dir: path::PathBuf) -> LocalStorage {
        return LocalStorage { dir };
    }

    pub fn get_file_path(&self, key: &str) -> path::PathBuf {
        return self.dir.join(format!("{key}.json"));
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(file_path).await?;
        return Ok(Some(payload));
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }

        let mut file = fs::File::create(self.get_file_path(key)).await?;
        file.write_all(value.as_bytes()).await?;
        file.flush().await?;

        return Ok(());
    }
}
