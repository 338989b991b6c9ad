//! Filter constants and runtime configuration defaults

// Delighting
/// Default blend weight between original and flattened lightness
pub const DEFAULT_SHADOW_STRENGTH: f32 = 0.5;
/// Lighting field kernel extent as a fraction of the shorter image side
pub const LIGHTING_KERNEL_FRACTION: f32 = 0.05;
/// Guards the lightness division against a near-zero lighting field
pub const LIGHTING_EPSILON: f32 = 1e-6;

// Normal generation
/// Default weight of the fine (unblurred) gradient
pub const DEFAULT_DETAIL_WEIGHT: f32 = 0.6;
/// Default weight of the broad-shape gradient
pub const DEFAULT_SHAPE_WEIGHT: f32 = 0.4;
/// Default global normal strength
pub const DEFAULT_NORMAL_STRENGTH: f32 = 1.0;

// Empirical tuning value, not a physical quantity
/// Gradient multiplier applied before normalization for visible relief
pub const NORMAL_VISIBILITY_BOOST: f32 = 4.0;
/// Blur applied to luminance before extracting shape gradients
pub const SHAPE_BLUR_KERNEL: usize = 9;
/// Gradient kernel for fine detail
pub const FINE_GRADIENT_KERNEL: usize = 3;
/// Gradient kernel for broad shape
pub const SHAPE_GRADIENT_KERNEL: usize = 5;
/// Lower bound on vector length during normalization
pub const NORMAL_EPSILON: f32 = 1e-8;

// Roughness generation
/// Default contrast applied around mid-gray
pub const DEFAULT_ROUGHNESS_CONTRAST: f32 = 1.2;
/// Default brightness offset
pub const DEFAULT_ROUGHNESS_BRIGHTNESS: f32 = 0.0;
/// Bright source pixels read as smooth surfaces by default
pub const DEFAULT_ROUGHNESS_INVERT: bool = true;
/// Share of curvature magnitude added to base roughness
pub const CURVATURE_WEIGHT: f32 = 0.3;

// Ambient occlusion
/// Default base radius in pixels
pub const DEFAULT_AO_RADIUS: f32 = 20.0;
/// Default occlusion strength
pub const DEFAULT_AO_STRENGTH: f32 = 1.5;

// Empirical tuning values
/// Multiples of the base radius sampled by the valley detector
pub const AO_SCALE_RATIOS: [f32; 3] = [0.5, 1.0, 2.0];
/// Largest accepted base radius
pub const MAX_AO_RADIUS: f32 = 512.0;

// Height generation
/// Low-frequency boost is on by default
pub const DEFAULT_HEIGHT_BOOST: bool = true;
/// Blur kernel for the low-frequency component
pub const HEIGHT_BLUR_KERNEL: usize = 31;
/// Weight of the unblurred luminance in the boosted height
pub const HEIGHT_DETAIL_MIX: f32 = 0.4;
/// Weight of the blurred luminance in the boosted height
pub const HEIGHT_BODY_MIX: f32 = 0.6;

// Safety limit for separable kernels
/// Largest accepted kernel extent
pub const MAX_KERNEL_SIZE: usize = 4097;

// Output settings
/// Separator between basename and map name
pub const MAP_NAME_SEPARATOR: char = '_';
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
