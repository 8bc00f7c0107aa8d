//! Canonical lump identifiers for Source engine maps
//!
//! The decoder itself works with raw indices `0..=63`; this enumeration names
//! the conventional purpose of each directory slot.

use crate::error::{BspError, Result};
use crate::offset::{LUMP_COUNT, checked_index};
use std::fmt;
use std::str::FromStr;

/// Named lump directory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LumpId {
    /// Entity key/value text
    Entities = 0,
    /// Plane array
    Planes = 1,
    /// Texture data index
    TexData = 2,
    /// Vertex positions
    Vertexes = 3,
    /// Compressed PVS/PAS visibility
    Visibility = 4,
    /// BSP tree nodes
    Nodes = 5,
    /// Face texture info
    TexInfo = 6,
    /// Face array
    Faces = 7,
    /// LDR lightmap samples
    Lighting = 8,
    /// Occlusion polygons
    Occlusion = 9,
    /// BSP tree leaves
    Leafs = 10,
    /// Face id remapping
    FaceIds = 11,
    /// Edge array
    Edges = 12,
    /// Signed edge indices
    SurfEdges = 13,
    /// Brush models
    Models = 14,
    /// LDR world lights
    WorldLights = 15,
    /// Leaf to face index
    LeafFaces = 16,
    /// Leaf to brush index
    LeafBrushes = 17,
    /// Brush array
    Brushes = 18,
    /// Brush side array
    BrushSides = 19,
    /// Area array
    Areas = 20,
    /// Area portals
    AreaPortals = 21,
    /// Portals (unused in most titles)
    Portals = 22,
    /// Clusters (unused in most titles)
    Clusters = 23,
    /// Portal vertices (unused in most titles)
    PortalVerts = 24,
    /// Cluster portals (unused in most titles)
    ClusterPortals = 25,
    /// Displacement surfaces
    DispInfo = 26,
    /// Faces before splitting
    OriginalFaces = 27,
    /// Displacement physics
    PhysDisp = 28,
    /// Physics collision models
    PhysCollide = 29,
    /// Vertex normals
    VertNormals = 30,
    /// Vertex normal indices
    VertNormalIndices = 31,
    /// Displacement lightmap alphas
    DispLightmapAlphas = 32,
    /// Displacement vertices
    DispVerts = 33,
    /// Displacement lightmap sample positions
    DispLightmapSamplePositions = 34,
    /// Game-specific lump directory
    GameLump = 35,
    /// Leaf water data
    LeafWaterData = 36,
    /// Water polygon primitives
    Primitives = 37,
    /// Primitive vertices
    PrimVerts = 38,
    /// Primitive indices
    PrimIndices = 39,
    /// Embedded ZIP archive
    PakFile = 40,
    /// Clip portal vertices
    ClipPortalVerts = 41,
    /// Cubemap samples
    Cubemaps = 42,
    /// Texture name string data
    TexDataStringData = 43,
    /// Texture name string offsets
    TexDataStringTable = 44,
    /// Overlays
    Overlays = 45,
    /// Leaf distance to water
    LeafMinDistToWater = 46,
    /// Face macro texture info
    FaceMacroTextureInfo = 47,
    /// Displacement triangle flags
    DispTris = 48,
    /// Physics collision surface (deprecated)
    PhysCollideSurface = 49,
    /// Water overlays
    WaterOverlays = 50,
    /// HDR ambient light indices
    LeafAmbientIndexHdr = 51,
    /// LDR ambient light indices
    LeafAmbientIndex = 52,
    /// HDR lightmap samples
    LightingHdr = 53,
    /// HDR world lights
    WorldLightsHdr = 54,
    /// HDR ambient lighting
    LeafAmbientLightingHdr = 55,
    /// LDR ambient lighting
    LeafAmbientLighting = 56,
    /// Console ZIP archive
    XZipPakFile = 57,
    /// HDR face array
    FacesHdr = 58,
    /// Map-wide flags
    MapFlags = 59,
    /// Overlay fade distances
    OverlayFades = 60,
    /// Overlay system levels
    OverlaySystemLevels = 61,
    /// Physics level settings
    PhysLevel = 62,
    /// Displacement multiblend data
    DispMultiblend = 63,
}

const NAMES: [&str; LUMP_COUNT] = [
    "LUMP_ENTITIES",
    "LUMP_PLANES",
    "LUMP_TEXDATA",
    "LUMP_VERTEXES",
    "LUMP_VISIBILITY",
    "LUMP_NODES",
    "LUMP_TEXINFO",
    "LUMP_FACES",
    "LUMP_LIGHTING",
    "LUMP_OCCLUSION",
    "LUMP_LEAFS",
    "LUMP_FACEIDS",
    "LUMP_EDGES",
    "LUMP_SURFEDGES",
    "LUMP_MODELS",
    "LUMP_WORLDLIGHTS",
    "LUMP_LEAFFACES",
    "LUMP_LEAFBRUSHES",
    "LUMP_BRUSHES",
    "LUMP_BRUSHSIDES",
    "LUMP_AREAS",
    "LUMP_AREAPORTALS",
    "LUMP_PORTALS",
    "LUMP_CLUSTERS",
    "LUMP_PORTALVERTS",
    "LUMP_CLUSTERPORTALS",
    "LUMP_DISPINFO",
    "LUMP_ORIGINALFACES",
    "LUMP_PHYSDISP",
    "LUMP_PHYSCOLLIDE",
    "LUMP_VERTNORMALS",
    "LUMP_VERTNORMALINDICES",
    "LUMP_DISP_LIGHTMAP_ALPHAS",
    "LUMP_DISP_VERTS",
    "LUMP_DISP_LIGHTMAP_SAMPLE_POSITIONS",
    "LUMP_GAME_LUMP",
    "LUMP_LEAFWATERDATA",
    "LUMP_PRIMITIVES",
    "LUMP_PRIMVERTS",
    "LUMP_PRIMINDICES",
    "LUMP_PAKFILE",
    "LUMP_CLIPPORTALVERTS",
    "LUMP_CUBEMAPS",
    "LUMP_TEXDATA_STRING_DATA",
    "LUMP_TEXDATA_STRING_TABLE",
    "LUMP_OVERLAYS",
    "LUMP_LEAFMINDISTTOWATER",
    "LUMP_FACE_MACRO_TEXTURE_INFO",
    "LUMP_DISP_TRIS",
    "LUMP_PHYSCOLLIDESURFACE",
    "LUMP_WATEROVERLAYS",
    "LUMP_LEAF_AMBIENT_INDEX_HDR",
    "LUMP_LEAF_AMBIENT_INDEX",
    "LUMP_LIGHTING_HDR",
    "LUMP_WORLDLIGHTS_HDR",
    "LUMP_LEAF_AMBIENT_LIGHTING_HDR",
    "LUMP_LEAF_AMBIENT_LIGHTING",
    "LUMP_XZIPPAKFILE",
    "LUMP_FACES_HDR",
    "LUMP_MAP_FLAGS",
    "LUMP_OVERLAY_FADES",
    "LUMP_OVERLAY_SYSTEM_LEVELS",
    "LUMP_PHYSLEVEL",
    "LUMP_DISP_MULTIBLEND",
];

impl LumpId {
    /// Every lump id in directory order
    pub const ALL: [Self; LUMP_COUNT] = [
        Self::Entities,
        Self::Planes,
        Self::TexData,
        Self::Vertexes,
        Self::Visibility,
        Self::Nodes,
        Self::TexInfo,
        Self::Faces,
        Self::Lighting,
        Self::Occlusion,
        Self::Leafs,
        Self::FaceIds,
        Self::Edges,
        Self::SurfEdges,
        Self::Models,
        Self::WorldLights,
        Self::LeafFaces,
        Self::LeafBrushes,
        Self::Brushes,
        Self::BrushSides,
        Self::Areas,
        Self::AreaPortals,
        Self::Portals,
        Self::Clusters,
        Self::PortalVerts,
        Self::ClusterPortals,
        Self::DispInfo,
        Self::OriginalFaces,
        Self::PhysDisp,
        Self::PhysCollide,
        Self::VertNormals,
        Self::VertNormalIndices,
        Self::DispLightmapAlphas,
        Self::DispVerts,
        Self::DispLightmapSamplePositions,
        Self::GameLump,
        Self::LeafWaterData,
        Self::Primitives,
        Self::PrimVerts,
        Self::PrimIndices,
        Self::PakFile,
        Self::ClipPortalVerts,
        Self::Cubemaps,
        Self::TexDataStringData,
        Self::TexDataStringTable,
        Self::Overlays,
        Self::LeafMinDistToWater,
        Self::FaceMacroTextureInfo,
        Self::DispTris,
        Self::PhysCollideSurface,
        Self::WaterOverlays,
        Self::LeafAmbientIndexHdr,
        Self::LeafAmbientIndex,
        Self::LightingHdr,
        Self::WorldLightsHdr,
        Self::LeafAmbientLightingHdr,
        Self::LeafAmbientLighting,
        Self::XZipPakFile,
        Self::FacesHdr,
        Self::MapFlags,
        Self::OverlayFades,
        Self::OverlaySystemLevels,
        Self::PhysLevel,
        Self::DispMultiblend,
    ];

    /// Directory index of this lump
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical `LUMP_*` name
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Look up a lump by directory index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up a lump by name, ignoring case and an optional `LUMP_` prefix
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("LUMP_").unwrap_or(&upper);
        NAMES
            .iter()
            .position(|n| n.strip_prefix("LUMP_") == Some(bare))
            .and_then(Self::from_index)
    }
}

impl TryFrom<i32> for LumpId {
    type Error = BspError;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for LumpId {
    type Error = BspError;

    fn try_from(value: i64) -> Result<Self> {
        let index = checked_index(value)?;
        Self::from_index(index).ok_or(BspError::OutOfRange(value))
    }
}

impl TryFrom<usize> for LumpId {
    type Error = BspError;

    fn try_from(value: usize) -> Result<Self> {
        Self::from_index(value)
            .ok_or_else(|| BspError::OutOfRange(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

impl From<LumpId> for usize {
    fn from(id: LumpId) -> Self {
        id.index()
    }
}

impl fmt::Display for LumpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a decimal index (`"40"`) or a lump name (`"pakfile"`, `"LUMP_PAKFILE"`)
impl FromStr for LumpId {
    type Err = BspError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(index) = s.trim().parse::<i64>() {
            return Self::try_from(index);
        }
        Self::from_name(s).ok_or_else(|| BspError::UnknownLump(s.to_string()))
    }
}
