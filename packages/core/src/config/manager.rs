use std::{
    fs::{self, create_dir_all, File},
    io::{BufWriter, Error as IOError, Write},
    path::PathBuf,
};

use config::{Config, ConfigError, Environment, FileFormat};
use log::debug;

use super::core_config::CoreConfig;

const DEFAULT_CONFIG: CoreConfig = CoreConfig {
    database_path: None,
    log_level: None,
};

const CONFIG_FILENAME: &str = "config.json";

const DB_DIR_NAME: &str = "db";

const ENV_PREFIX: &str = "REPOKIT";

/**
 * Configuration manager
 *
 * Manages repokit config directory ( config file, database location... )
 */
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /**
     * Create config file at given path
     */
    fn create_config_file(path: &PathBuf) -> Result<File, IOError> {
        let path_display = path.display().to_string();

        debug!("Creating config file at {}...", path_display);

        if let Some(dir_path) = path.parent() {
            create_dir_all(dir_path)?;
        }

        let file = File::create_new(path)?;

        ConfigManager::write_default_config(&file)?;

        debug!("Done writing config file at {} !", path_display);

        Ok(file)
    }

    /**
     * Write default config values to given file
     */
    fn write_default_config(file: &File) -> Result<(), IOError> {
        debug!("Writing default config values...");

        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &DEFAULT_CONFIG)?;

        writer.flush()?;

        debug!("Done writing default config values !");

        Ok(())
    }

    /**
     * Handle initializing config for first time
     */
    fn init_config(directory_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Initializing config directory...");

        let config_file_path = directory_path.join(CONFIG_FILENAME);

        if !fs::exists(&config_file_path)? {
            debug!("Creating default config file...");

            ConfigManager::create_config_file(&config_file_path)?;

            debug!("Done creating default config file !");
        }

        debug!("Done initializing config directory !");

        Ok(())
    }

    /**
     * Layer config file then environment variables using given prefix
     */
    fn load_with_prefix(&self, env_prefix: &str) -> Result<CoreConfig, ConfigError> {
        debug!("Loading repokit config...");

        let config = Config::builder()
            .add_source(
                config::File::from(self.get_config_file_path())
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        let core_config = config.try_deserialize::<CoreConfig>()?;

        debug!("Done loading repokit config !");

        Ok(core_config)
    }

    /**
     * Load config, `REPOKIT_*` environment variables take precedence over config file
     */
    pub fn load(&self) -> Result<CoreConfig, ConfigError> {
        self.load_with_prefix(ENV_PREFIX)
    }

    /**
     * Get config dir path
     */
    pub fn get_path(&self) -> PathBuf {
        self.path.clone()
    }

    /**
     * Get config file path
     */
    pub fn get_config_file_path(&self) -> PathBuf {
        self.path.join(CONFIG_FILENAME)
    }

    /**
     * Get DB path, defaults to a directory inside config dir
     */
    pub fn get_db_path(&self, core_config: &CoreConfig) -> PathBuf {
        match &core_config.database_path {
            Some(database_path) => PathBuf::from(database_path),
            None => self.path.join(DB_DIR_NAME),
        }
    }
}

impl TryFrom<&PathBuf> for ConfigManager {
    type Error = Box<dyn std::error::Error>;

    /**
     * Instantiate ConfigManager while making sure config file exists
     */
    fn try_from(directory_path: &PathBuf) -> Result<Self, Self::Error> {
        debug!(
            "Building ConfigManager using path {}...",
            directory_path.display().to_string()
        );

        ConfigManager::init_config(directory_path)?;

        let manager = ConfigManager {
            path: directory_path.clone(),
        };

        debug!(
            "Done building ConfigManager using path {} !",
            directory_path.display().to_string()
        );

        Ok(manager)
    }
}
