/// Height samples are 8-bit elevation proxies; a full-range sample
/// maps to the descriptor's `maxHeight`.
pub const MAX_SAMPLE: f32 = 255.0;
