#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    DataDir,
    GeminiToken,
    GeminiURL,
    Model,
    SummaryExcerptLength,
    SummaryMinLength,
}

impl ConfigKey {
    /// Keys that must hold a non-negative integer.
    fn is_numeric(&self) -> bool {
        return matches!(
            self,
            ConfigKey::SummaryExcerptLength | ConfigKey::SummaryMinLength
        );
    }
}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base
        .unwrap_or_else(|| return path::PathBuf::from("."))
        .join("mindscape");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    /// Reads a numeric key, falling back to its default when the stored value
    /// is missing or not a number.
    pub fn get_usize(key: ConfigKey) -> usize {
        if let Ok(val) = Config::get(key).parse::<usize>() {
            return val;
        }

        return Config::default(key).parse::<usize>().unwrap_or_default();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ConfigFile => app_dir(dirs::config_dir())
                .join("config.toml")
                .to_string_lossy()
                .to_string(),
            ConfigKey::DataDir => app_dir(dirs::data_dir()).to_string_lossy().to_string(),
            ConfigKey::GeminiToken => "".to_string(),
            ConfigKey::GeminiURL => "https://generativelanguage.googleapis.com".to_string(),
            ConfigKey::Model => "gemini-2.5-flash".to_string(),
            ConfigKey::SummaryExcerptLength => "150".to_string(),
            ConfigKey::SummaryMinLength => "50".to_string(),
        };

        return res;
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        if key.is_numeric() && val_int < 0 {
                            bail!(format!(
                                "config.toml has an invalid value for key '{key}': {val_int}\nExpected a positive number"
                            ));
                        }
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if key.is_numeric() && val_str.parse::<usize>().is_err() {
                            bail!(format!(
                                "config.toml has an invalid value for key '{key}': {val_str}\nExpected a positive number"
                            ));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        // Flags and environment variables win over the config file.
        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    if key.is_numeric() && val.parse::<usize>().is_err() {
                        bail!(format!("--{key} expects a positive number, got {val}"));
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = %Config::get(ConfigKey::ConfigFile),
            data_dir = %Config::get(ConfigKey::DataDir),
            model = %Config::get(ConfigKey::Model),
            has_token = !Config::get(ConfigKey::GeminiToken).is_empty(),
            summary_min_length = %Config::get(ConfigKey::SummaryMinLength),
            summary_excerpt_length = %Config::get(ConfigKey::SummaryExcerptLength),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let mut description = "".to_string();
                if let Some(arg) = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                {
                    if let Some(help) = arg.get_help() {
                        description = help
                            .to_string()
                            .split("[default:")
                            .next()
                            .unwrap_or_default()
                            .trim()
                            .to_string();
                    }
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if key.is_numeric() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = {}", toml_edit::value(val));
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
