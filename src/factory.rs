//! Fixture factory: input files and single-class jar packages
//!
//! All operations are one-shot and synchronous. Artifacts land in the scratch
//! directory resolved from the injected [`Settings`]; cleanup after creation
//! is the caller's responsibility.

use crate::config::{Settings, DEFAULT_SCRATCH_DIR, SCRATCH_DIR_KEY};
use crate::naming::random_dat_name;
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

/// Jar manifest written into every generated archive
const MANIFEST_NAME: &str = "META-INF/MANIFEST.MF";
const MANIFEST_CONTENT: &[u8] = b"Manifest-Version: 1.0\r\n\r\n";

/// Generates test fixtures in the configured scratch directory.
///
/// Dependencies are injected at construction time: the settings store that
/// supplies the scratch-directory path, the directory holding compiled class
/// files, and the dotted package name mirrored into jar entry paths.
pub struct FixtureFactory {
    settings: Settings,
    class_dir: PathBuf,
    package: String,
}

impl FixtureFactory {
    /// Creates a factory.
    ///
    /// `class_dir` is the compiled-class output directory of the test classes
    /// (supplied by the test harness); `package` is their dotted package name,
    /// e.g. `engine.jobmanager.tests`.
    pub fn new(
        settings: Settings,
        class_dir: impl Into<PathBuf>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            class_dir: class_dir.into(),
            package: package.into(),
        }
    }

    /// Generates a random fixture filename, 16 hex characters plus `.dat`
    pub fn random_filename(&self) -> String {
        random_dat_name()
    }

    /// Resolves the scratch directory from the settings.
    ///
    /// Does not verify that the directory exists or is writable; that check
    /// happens lazily when a fixture is created.
    pub fn scratch_dir(&self) -> PathBuf {
        PathBuf::from(
            self.settings
                .get_string(SCRATCH_DIR_KEY, DEFAULT_SCRATCH_DIR),
        )
    }

    /// Creates a randomly named file in the scratch directory containing the
    /// integers `0..limit`, one per line, newline-terminated and ascending.
    ///
    /// A same-named file is deleted first, best effort. The caller cannot
    /// control or predict the chosen name.
    pub fn create_input_file(&self, limit: i32) -> Result<PathBuf> {
        if limit < 0 {
            return Err(Error::InvalidArgument(format!(
                "limit must be >= 0, got {}",
                limit
            )));
        }

        let path = self.scratch_dir().join(self.random_filename());
        debug!("Writing input fixture with {} lines to {:?}", limit, path);

        // Overwrite-if-present semantics; a failed delete is reported by the
        // create below, not here
        let _ = fs::remove_file(&path);

        let mut writer = BufWriter::new(File::create(&path)?);
        for i in 0..limit {
            writeln!(writer, "{}", i)?;
        }
        writer.flush()?;

        info!("Created input fixture: {:?}", path);
        Ok(path)
    }

    /// Packages the compiled class named `class_name` into a fresh jar in the
    /// scratch directory.
    ///
    /// The jar holds a manifest and a single entry with the raw bytes of
    /// `<class_dir>/<class_name>.class`, stored under the package-mirroring
    /// path `/<package-path>/<class_name>.class`. Any pre-existing jar for
    /// the same class is deleted first, best effort; concurrent callers
    /// targeting the same class name must serialize themselves.
    pub fn create_jar_file(&self, class_name: &str) -> Result<PathBuf> {
        let jar_path = self.scratch_dir().join(format!("{}.jar", class_name));
        let class_path = self.class_dir.join(format!("{}.class", class_name));

        if !class_path.is_file() {
            return Err(Error::ClassNotFound(class_path));
        }

        let _ = fs::remove_file(&jar_path);

        debug!("Packaging {:?} into {:?}", class_path, jar_path);
        write_single_class_jar(&jar_path, &class_path, &self.entry_name(class_name))?;

        info!("Created jar fixture: {:?}", jar_path);
        Ok(jar_path)
    }

    /// Jar entry path for a class: leading separator, package with dots
    /// replaced by slashes, simple class name
    fn entry_name(&self, class_name: &str) -> String {
        format!("/{}/{}.class", self.package.replace('.', "/"), class_name)
    }
}

/// Writes a jar containing the manifest and one class entry streamed from
/// `class_path`
fn write_single_class_jar(jar_path: &Path, class_path: &Path, entry_name: &str) -> Result<()> {
    let file = File::create(jar_path)?;
    let mut jar = ZipWriter::new(file);

    // Class bytes are already compressed artifacts of the build; store them
    let options =
        FileOptions::<'static, ()>::default().compression_method(CompressionMethod::Stored);

    jar.start_file(MANIFEST_NAME, options)?;
    jar.write_all(MANIFEST_CONTENT)?;

    jar.start_file(entry_name, options)?;
    let mut class_file = File::open(class_path)?;
    io::copy(&mut class_file, &mut jar)?;

    jar.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn factory_in(temp_dir: &TempDir) -> FixtureFactory {
        let mut settings = Settings::new();
        settings.set_string(SCRATCH_DIR_KEY, temp_dir.path().to_string_lossy());
        FixtureFactory::new(settings, temp_dir.path().join("classes"), "engine.tests")
    }

    #[test]
    fn test_scratch_dir_defaults_without_configuration() {
        let factory = FixtureFactory::new(Settings::new(), "/classes", "engine.tests");
        assert_eq!(factory.scratch_dir(), PathBuf::from(DEFAULT_SCRATCH_DIR));
    }

    #[test]
    fn test_scratch_dir_uses_configured_value() {
        let temp_dir = TempDir::new().unwrap();
        let factory = factory_in(&temp_dir);
        assert_eq!(factory.scratch_dir(), temp_dir.path());
    }

    #[test]
    fn test_negative_limit_is_rejected_eagerly() {
        let temp_dir = TempDir::new().unwrap();
        let factory = factory_in(&temp_dir);

        let err = factory.create_input_file(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        // No fixture was written
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_entry_name_mirrors_package() {
        let factory = FixtureFactory::new(Settings::new(), "/classes", "engine.jobmanager.tests");
        assert_eq!(
            factory.entry_name("ForwardJob"),
            "/engine/jobmanager/tests/ForwardJob.class"
        );
    }
}
