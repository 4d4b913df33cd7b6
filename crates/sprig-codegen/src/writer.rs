//! Persistence of generated artifacts.

use crate::artifact::{GeneratedArtifact, MiniProgramBundle, Payload, Platform};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Destination for generated files.
pub trait ArtifactWriter {
    /// Write one file under the platform's output directory.
    fn write_file(&self, platform: Platform, filename: &str, content: &str) -> Result<PathBuf>;

    /// Write the four files of a mini-program bundle.
    fn write_bundle(&self, component_name: &str, bundle: &MiniProgramBundle) -> Result<Vec<PathBuf>> {
        bundle
            .files(component_name)
            .iter()
            .map(|file| self.write_file(Platform::MiniProgram, &file.path, &file.content))
            .collect()
    }

    /// Write every file of an artifact.
    fn write_artifact(&self, artifact: &GeneratedArtifact) -> Result<Vec<PathBuf>> {
        match &artifact.payload {
            Payload::Module { filename, source } => {
                Ok(vec![self.write_file(artifact.platform, filename, source)?])
            }
            Payload::Bundle(bundle) => self.write_bundle(&artifact.component_name, bundle),
        }
    }
}

/// Writes artifacts below a root directory, one subdirectory per platform.
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a platform's files go to.
    pub fn platform_dir(&self, platform: Platform) -> PathBuf {
        self.root.join(platform.output_dir())
    }
}

impl ArtifactWriter for FsWriter {
    fn write_file(&self, platform: Platform, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.platform_dir(platform).join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote file");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_module() {
        let dir = TempDir::new().unwrap();
        let writer = FsWriter::new(dir.path());
        let artifact = GeneratedArtifact::module(Platform::Native, "Card", "source".into());

        let paths = writer.write_artifact(&artifact).unwrap();
        assert_eq!(paths, vec![dir.path().join("mobile/components/Card.tsx")]);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "source");
    }

    #[test]
    fn test_write_bundle() {
        let dir = TempDir::new().unwrap();
        let writer = FsWriter::new(dir.path());
        let bundle = MiniProgramBundle {
            wxml: "<view />".into(),
            wxss: ".a {}".into(),
            js: "Component({});".into(),
            json: "{}".into(),
        };

        let paths = writer.write_bundle("MyCard", &bundle).unwrap();
        assert_eq!(paths.len(), 4);

        let component_dir = dir.path().join("wechat/components/mycard");
        assert_eq!(
            fs::read_to_string(component_dir.join("index.wxml")).unwrap(),
            "<view />"
        );
        assert_eq!(
            fs::read_to_string(component_dir.join("index.wxss")).unwrap(),
            ".a {}"
        );
        assert!(component_dir.join("index.js").exists());
        assert!(component_dir.join("index.json").exists());
    }

    #[test]
    fn test_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let writer = FsWriter::new(dir.path());
        writer.write_file(Platform::Web, "A.tsx", "old").unwrap();
        let path = writer.write_file(Platform::Web, "A.tsx", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }
}
