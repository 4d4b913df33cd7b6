//! Generated artifacts and the platforms they target.

use crate::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output platform.
///
/// Serialized with the short names used on the command line and in the
/// output directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// React with utility classes.
    #[serde(rename = "pc")]
    Web,
    /// React Native.
    #[serde(rename = "mobile")]
    Native,
    /// WeChat mini-program component.
    #[serde(rename = "wechat")]
    MiniProgram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Web, Platform::Native, Platform::MiniProgram];

    /// Short name.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "pc",
            Platform::Native => "mobile",
            Platform::MiniProgram => "wechat",
        }
    }

    /// Directory artifacts for this platform are written to, relative to the output root.
    pub fn output_dir(self) -> &'static str {
        match self {
            Platform::Web => "pc/components",
            Platform::Native => "mobile/components",
            Platform::MiniProgram => "wechat/components",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pc" | "web" | "react" => Ok(Platform::Web),
            "mobile" | "native" | "react-native" => Ok(Platform::Native),
            "wechat" | "miniprogram" | "mini-program" => Ok(Platform::MiniProgram),
            _ => Err(CodegenError::UnsupportedPlatform(s.to_string())),
        }
    }
}

/// A file to be written, relative to the platform's output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The four coupled payloads of a mini-program component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniProgramBundle {
    pub wxml: String,
    pub wxss: String,
    pub js: String,
    pub json: String,
}

impl MiniProgramBundle {
    /// Files of the bundle, placed in a directory named after the component.
    pub fn files(&self, component_name: &str) -> Vec<GeneratedFile> {
        let dir = component_name.to_lowercase();
        vec![
            GeneratedFile::new(format!("{}/index.wxml", dir), self.wxml.as_str()),
            GeneratedFile::new(format!("{}/index.wxss", dir), self.wxss.as_str()),
            GeneratedFile::new(format!("{}/index.js", dir), self.js.as_str()),
            GeneratedFile::new(format!("{}/index.json", dir), self.json.as_str()),
        ]
    }
}

/// Text produced by one lowering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A single source module.
    Module { filename: String, source: String },
    /// A mini-program bundle.
    Bundle(MiniProgramBundle),
}

/// Output of lowering one root node for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub platform: Platform,
    pub component_name: String,
    pub payload: Payload,
}

impl GeneratedArtifact {
    /// An artifact holding one `.tsx` module.
    pub fn module(platform: Platform, component_name: &str, source: String) -> Self {
        Self {
            platform,
            component_name: component_name.to_string(),
            payload: Payload::Module {
                filename: format!("{}.tsx", component_name),
                source,
            },
        }
    }

    /// An artifact holding a mini-program bundle.
    pub fn bundle(component_name: &str, bundle: MiniProgramBundle) -> Self {
        Self {
            platform: Platform::MiniProgram,
            component_name: component_name.to_string(),
            payload: Payload::Bundle(bundle),
        }
    }

    /// All files of the artifact, relative to the platform's output directory.
    pub fn files(&self) -> Vec<GeneratedFile> {
        match &self.payload {
            Payload::Module { filename, source } => {
                vec![GeneratedFile::new(filename.as_str(), source.as_str())]
            }
            Payload::Bundle(bundle) => bundle.files(&self.component_name),
        }
    }

    /// The artifact as one string: the module source, or the bundle as JSON.
    pub fn code(&self) -> Result<String> {
        match &self.payload {
            Payload::Module { source, .. } => Ok(source.clone()),
            Payload::Bundle(bundle) => Ok(serde_json::to_string(bundle)?),
        }
    }

    /// The module source, if this artifact is a single module.
    pub fn source(&self) -> Option<&str> {
        match &self.payload {
            Payload::Module { source, .. } => Some(source.as_str()),
            Payload::Bundle(_) => None,
        }
    }

    /// The mini-program bundle, if this artifact is one.
    pub fn as_bundle(&self) -> Option<&MiniProgramBundle> {
        match &self.payload {
            Payload::Bundle(bundle) => Some(bundle),
            Payload::Module { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_names() {
        assert_eq!("pc".parse::<Platform>().unwrap(), Platform::Web);
        assert_eq!("Mobile".parse::<Platform>().unwrap(), Platform::Native);
        assert_eq!("wechat".parse::<Platform>().unwrap(), Platform::MiniProgram);
        assert!(matches!(
            "desktop".parse::<Platform>(),
            Err(CodegenError::UnsupportedPlatform(_))
        ));
        assert_eq!(
            serde_json::to_string(&Platform::MiniProgram).unwrap(),
            "\"wechat\""
        );
    }

    #[test]
    fn test_module_files() {
        let artifact = GeneratedArtifact::module(Platform::Web, "Card", "code".into());
        let files = artifact.files();
        assert_eq!(files, vec![GeneratedFile::new("Card.tsx", "code")]);
        assert_eq!(artifact.source(), Some("code"));
        assert_eq!(artifact.code().unwrap(), "code");
    }

    #[test]
    fn test_bundle_files() {
        let bundle = MiniProgramBundle {
            wxml: "<view />".into(),
            wxss: String::new(),
            js: "Component({});".into(),
            json: "{}".into(),
        };
        let artifact = GeneratedArtifact::bundle("MyCard", bundle);
        let paths: Vec<_> = artifact.files().into_iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec![
                "mycard/index.wxml",
                "mycard/index.wxss",
                "mycard/index.js",
                "mycard/index.json"
            ]
        );

        let code: serde_json::Value = serde_json::from_str(&artifact.code().unwrap()).unwrap();
        assert_eq!(code["wxml"], "<view />");
    }
}
