//! Output file naming and the suffix convention importers rely on
//!
//! Every map is written as `<basename>_<MapName>.<ext>`. Importers group files
//! by the text before the final underscore and recognise the map role from
//! the suffix after it, so the map names below must stay stable.

use crate::io::configuration::MAP_NAME_SEPARATOR;
use crate::io::image::OutputFormat;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The five maps produced by one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapKind {
    /// Delighted base color (RGB)
    Albedo,
    /// Tangent-space normals (RGB)
    Normal,
    /// Roughness (grayscale)
    Roughness,
    /// Ambient occlusion (grayscale)
    AmbientOcclusion,
    /// Height/displacement (grayscale)
    Height,
}

impl MapKind {
    /// Every map in save order
    pub const ALL: [Self; 5] = [
        Self::Albedo,
        Self::Normal,
        Self::Roughness,
        Self::AmbientOcclusion,
        Self::Height,
    ];

    /// Name used as the file suffix
    pub const fn name(self) -> &'static str {
        match self {
            Self::Albedo => "Albedo",
            Self::Normal => "Normal",
            Self::Roughness => "Roughness",
            Self::AmbientOcclusion => "AO",
            Self::Height => "Height",
        }
    }

    /// Channels in the written image
    pub const fn channels(self) -> usize {
        match self {
            Self::Albedo | Self::Normal => 3,
            Self::Roughness | Self::AmbientOcclusion | Self::Height => 1,
        }
    }

    /// `<basename>_<MapName>.<ext>`
    pub fn file_name(self, basename: &str, format: OutputFormat) -> String {
        format!(
            "{basename}{MAP_NAME_SEPARATOR}{}.{}",
            self.name(),
            format.extension()
        )
    }

    /// Full output path inside `dir`
    pub fn output_path(self, dir: &Path, basename: &str, format: OutputFormat) -> PathBuf {
        dir.join(self.file_name(basename, format))
    }
}

/// Material slot an importer binds a texture to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialRole {
    /// Base color / albedo
    BaseColor,
    /// Normal map
    Normal,
    /// Roughness
    Roughness,
    /// Metalness; recognised but never produced here
    Metallic,
    /// Ambient occlusion
    AmbientOcclusion,
    /// Height / displacement
    Displacement,
}

// Checked in order; the first matching entry wins
const ROLE_KEYWORDS: [(MaterialRole, &[&str]); 6] = [
    (MaterialRole::BaseColor, &["basecolor", "albedo", "diffuse", "color"]),
    (MaterialRole::Normal, &["normal"]),
    (MaterialRole::Roughness, &["roughness"]),
    (MaterialRole::Metallic, &["metallic", "metalness"]),
    (MaterialRole::AmbientOcclusion, &["ao", "ambient", "occlusion"]),
    (MaterialRole::Displacement, &["height", "displacement"]),
];

impl MaterialRole {
    /// Recognise a role from a file-name suffix, case-insensitively
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let lowered = suffix.to_lowercase();
        ROLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(role, _)| *role)
    }

    /// Recognise a role from a full file name such as `wall_Normal.png`
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        split_material_name(file_name).and_then(|(_, suffix)| Self::from_suffix(suffix))
    }
}

impl From<MapKind> for MaterialRole {
    fn from(kind: MapKind) -> Self {
        match kind {
            MapKind::Albedo => Self::BaseColor,
            MapKind::Normal => Self::Normal,
            MapKind::Roughness => Self::Roughness,
            MapKind::AmbientOcclusion => Self::AmbientOcclusion,
            MapKind::Height => Self::Displacement,
        }
    }
}

/// Split a file name into material prefix and map suffix at the last underscore
///
/// The extension is ignored. Returns `None` when the stem has no underscore.
pub fn split_material_name(file_name: &str) -> Option<(&str, &str)> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.rsplit_once(MAP_NAME_SEPARATOR)
}

/// Group file paths by material prefix, tagging each with its recognised role
///
/// Files whose stem has no underscore are left out.
pub fn group_by_material<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
) -> BTreeMap<String, Vec<(Option<MaterialRole>, PathBuf)>> {
    let mut groups: BTreeMap<String, Vec<(Option<MaterialRole>, PathBuf)>> = BTreeMap::new();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some((prefix, suffix)) = split_material_name(file_name) {
            groups
                .entry(prefix.to_string())
                .or_default()
                .push((MaterialRole::from_suffix(suffix), path.to_path_buf()));
        }
    }
    groups
}
