//! Batch generation over the requested roots of a document.
//!
//! Each root is lowered on its own. A root that fails, whether by error or
//! by panic, yields an error-marker result and the batch carries on.

use crate::artifact::{GeneratedArtifact, Platform};
use crate::error::{CodegenError, Result};
use crate::format::FormatterKind;
use crate::generators::CodeGenerator;
use crate::naming::component_name;
use crate::writer::ArtifactWriter;
use serde::{Deserialize, Serialize};
use sprig_core::{DesignNode, NodesResponse};
use sprig_style::DEFAULT_SIZE_TOLERANCE;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Target platform.
    pub platform: Platform,
    /// Size tolerance for web size classes.
    pub size_tolerance: f64,
    /// Formatter applied to every payload.
    pub formatter: FormatterKind,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Web,
            size_tolerance: DEFAULT_SIZE_TOLERANCE,
            formatter: FormatterKind::default(),
        }
    }
}

impl GenerateOptions {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn with_size_tolerance(mut self, tolerance: f64) -> Self {
        self.size_tolerance = tolerance;
        self
    }

    pub fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }
}

/// Build the generator for `options.platform`.
pub fn generator_for(options: &GenerateOptions) -> Result<Box<dyn CodeGenerator>> {
    let formatter = options.formatter.build();
    match options.platform {
        #[cfg(feature = "web")]
        Platform::Web => {
            let classifier =
                sprig_style::StyleClassifier::new().with_size_tolerance(options.size_tolerance);
            Ok(Box::new(
                crate::generators::WebGenerator::new()
                    .with_classifier(classifier)
                    .with_formatter(formatter),
            ))
        }
        #[cfg(feature = "native")]
        Platform::Native => Ok(Box::new(
            crate::generators::NativeGenerator::new().with_formatter(formatter),
        )),
        #[cfg(feature = "miniprogram")]
        Platform::MiniProgram => Ok(Box::new(
            crate::generators::MiniProgramGenerator::new().with_formatter(formatter),
        )),
        #[allow(unreachable_patterns)]
        other => Err(CodegenError::UnsupportedPlatform(other.to_string())),
    }
}

/// Outcome for one requested root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResult {
    pub node_id: String,
    pub name: String,
    pub filename: String,
    /// Generated source, the bundle as JSON, or the error marker.
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub artifact: Option<GeneratedArtifact>,
}

impl ComponentResult {
    fn generated(node_id: &str, artifact: GeneratedArtifact) -> Result<Self> {
        Ok(Self {
            node_id: node_id.to_string(),
            name: artifact.component_name.clone(),
            filename: artifact.component_name.clone(),
            code: artifact.code()?,
            error: None,
            artifact: Some(artifact),
        })
    }

    fn failed(node_id: &str, message: String) -> Self {
        Self {
            node_id: node_id.to_string(),
            name: "Error".to_string(),
            filename: "error".to_string(),
            code: format!("// Error processing node {}: {}", node_id, message),
            error: Some(message),
            artifact: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Generate every requested root of `response` for `options.platform`.
///
/// Fails only if the platform has no generator; per-root failures are
/// reported in the results.
pub fn generate_batch(
    response: &NodesResponse,
    ids: &[String],
    options: &GenerateOptions,
    writer: Option<&dyn ArtifactWriter>,
) -> Result<Vec<ComponentResult>> {
    let generator = generator_for(options)?;
    Ok(generate_with(response, ids, generator.as_ref(), writer))
}

/// Generate every requested root with an explicit generator.
///
/// Ids missing from the response are logged and skipped.
pub fn generate_with(
    response: &NodesResponse,
    ids: &[String],
    generator: &dyn CodeGenerator,
    writer: Option<&dyn ArtifactWriter>,
) -> Vec<ComponentResult> {
    let mut results = Vec::with_capacity(ids.len());

    for id in ids {
        let node = match response.node(id) {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(node_id = %id, %err, "skipping node");
                continue;
            }
        };

        let name = component_name(&node.name, id);
        let result = generate_root(node, &name, generator, writer)
            .and_then(|artifact| ComponentResult::generated(id, artifact));

        match result {
            Ok(result) => {
                tracing::info!(node_id = %id, component = %name, platform = %generator.platform(), "generated component");
                results.push(result);
            }
            Err(err) => {
                tracing::error!(node_id = %id, %err, "error processing node");
                results.push(ComponentResult::failed(id, err.to_string()));
            }
        }
    }

    results
}

fn generate_root(
    node: &DesignNode,
    name: &str,
    generator: &dyn CodeGenerator,
    writer: Option<&dyn ArtifactWriter>,
) -> Result<GeneratedArtifact> {
    let artifact = catch_unwind(AssertUnwindSafe(|| generator.generate(node, name)))
        .map_err(|panic| CodegenError::LoweringFailed(panic_message(panic.as_ref())))??;

    if let Some(writer) = writer {
        writer.write_artifact(&artifact)?;
    }
    Ok(artifact)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic while lowering".to_string()
    }
}
