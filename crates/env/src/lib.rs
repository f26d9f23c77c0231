use std::{env::var, path::PathBuf, sync::Arc};

use dotenv::dotenv;
use eyre::{Context, Error};
use log::info;
use model::variant::Variant;

pub const DATA_DIR: &str = "TRENINGOWNIK_DATA_DIR";
pub const VARIANT: &str = "TRENINGOWNIK_VARIANT";

const DEFAULT_DATA_DIR: &str = ".treningownik";

#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone, Debug)]
pub struct EnvInner {
    data_dir: PathBuf,
    variant: Variant,
}

impl Env {
    pub fn data_dir(&self) -> &PathBuf {
        &self.0.data_dir
    }

    pub fn variant(&self) -> Variant {
        self.0.variant
    }

    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }
        Env::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Env, Error> {
        let data_dir = lookup(DATA_DIR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let variant = match lookup(VARIANT).filter(|v| !v.is_empty()) {
            Some(variant) => variant
                .parse()
                .with_context(|| format!("{} has unknown value {:?}", VARIANT, variant))?,
            None => Variant::default(),
        };

        Ok(Env(Arc::new(EnvInner { data_dir, variant })))
    }
}
