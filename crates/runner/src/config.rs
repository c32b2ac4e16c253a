use config::{Config as ConfigLoader, Environment, File, Map};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::Error;
use layout_bench_core::harness::{DEFAULT_RUNS, DEFAULT_SIZES};

/// Prefix for environment overrides, e.g. `LAYOUT_BENCH_HARNESS__RUNS=10`.
const ENV_PREFIX: &str = "LAYOUT_BENCH";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    #[serde(deserialize_with = "deserialize_sizes")]
    pub sizes: Vec<usize>,
    pub runs: usize,
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub chart_path: String,
    pub csv_path: Option<String>,
    pub show_chart: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            chart_path: "benchmark_results.png".to_string(),
            csv_path: None,
            show_chart: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub harness: HarnessConfig,
    pub report: ReportConfig,
}

/// Accepts a list of sizes, a single size, or a comma-separated string.
///
/// An env override without a comma reaches here as a lone integer, and list
/// elements split from an env value arrive as strings.
fn deserialize_sizes<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SizesVisitor)
}

struct SizesVisitor;

impl<'de> Visitor<'de> for SizesVisitor {
    type Value = Vec<usize>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a size or a list of sizes")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(vec![size_from_u64(v)?])
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(vec![size_from_i64(v)?])
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_size)
            .collect()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut sizes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Size(n)) = seq.next_element()? {
            sizes.push(n);
        }
        Ok(sizes)
    }
}

/// One list element, written either as an integer or as a numeric string.
struct Size(usize);

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SizeVisitor;

        impl<'de> Visitor<'de> for SizeVisitor {
            type Value = Size;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Size, E> {
                size_from_u64(v).map(Size)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Size, E> {
                size_from_i64(v).map(Size)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Size, E> {
                parse_size(v.trim()).map(Size)
            }
        }

        deserializer.deserialize_any(SizeVisitor)
    }
}

fn size_from_u64<E: de::Error>(v: u64) -> Result<usize, E> {
    usize::try_from(v).map_err(|_| E::custom(format!("size {} does not fit in usize", v)))
}

fn size_from_i64<E: de::Error>(v: i64) -> Result<usize, E> {
    usize::try_from(v).map_err(|_| E::custom(format!("size must be non-negative, got {}", v)))
}

fn parse_size<E: de::Error>(s: &str) -> Result<usize, E> {
    s.parse()
        .map_err(|e| E::custom(format!("invalid size {:?}: {}", s, e)))
}

/// Loads configuration from the optional workspace file and environment variables.
///
/// Every key has a default, so a bare checkout with no file and no
/// `LAYOUT_BENCH_*` variables runs the standard benchmark.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("runner")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

/// Loads configuration from `path` if it exists, layering environment overrides on top.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    load_config_with_env(path, None)
}

/// Same as [`load_config_from`], reading overrides from `vars` instead of the
/// process environment when given.
fn load_config_with_env(path: &Path, vars: Option<Map<String, String>>) -> Result<Config, Error> {
    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .source(vars)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("harness.sizes"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
