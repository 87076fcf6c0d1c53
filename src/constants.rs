// Host page and input wiring constants.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Query-string overrides for the two clocks' zones, e.g. `?tz1=Asia/Tokyo`
pub const QUERY_TZ1: &str = "tz1";
pub const QUERY_TZ2: &str = "tz2";

// Rendering
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const INITIAL_INSTANCE_CAPACITY: usize = 256;

// Frame statistics are logged at debug level this often
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
