use crate::{
    cover::label::LabelStyle,
    foundation::error::{ScratchError, ScratchResult},
    reveal::state::FadeSpec,
    scratch::tracker::ScratchParams,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-instance scratch card configuration.
///
/// A pure data model: it can be built programmatically or deserialized from
/// JSON. Media sources are opaque relative paths resolved by the host's
/// asset pipeline; the engine never reads them itself.
pub struct CardConfig {
    /// Relative path of the underlying video resource.
    pub video_src: String,
    /// Relative path of the cover texture image.
    pub texture_src: String,
    /// Cover label styling.
    #[serde(default)]
    pub label: LabelStyle,
    /// Scratch interaction parameters.
    #[serde(default)]
    pub scratch: ScratchParams,
    /// Reveal fade parameters.
    #[serde(default)]
    pub fade: FadeSpec,
}

impl CardConfig {
    /// Construct a configuration with default label, scratch, and fade
    /// settings.
    pub fn new(video_src: impl Into<String>, texture_src: impl Into<String>) -> Self {
        Self {
            video_src: video_src.into(),
            texture_src: texture_src.into(),
            label: LabelStyle::default(),
            scratch: ScratchParams::default(),
            fade: FadeSpec::default(),
        }
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> ScratchResult<()> {
        validate_rel_source(&self.video_src, "video_src")?;
        validate_rel_source(&self.texture_src, "texture_src")?;
        self.label.validate()?;
        self.scratch.validate()?;
        self.fade.validate()?;
        Ok(())
    }
}

fn validate_rel_source(source: &str, field: &str) -> ScratchResult<()> {
    if source.trim().is_empty() {
        return Err(ScratchError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ScratchError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(ScratchError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/card/config.rs"]
mod tests;
