// https://xiph.org/vorbis/doc/Vorbis_I_spec.html#x1-620004.2.1
pub const VORBIS_IDENT_HEAD: &[u8] = &[1, 118, 111, 114, 98, 105, 115];
pub const VORBIS_COMMENT_HEAD: &[u8] = &[3, 118, 111, 114, 98, 105, 115];

// https://xiph.org/vorbis/doc/Vorbis_I_spec.html#x1-630004.2.2
// Signature (7) + version (4) + channels (1) + sample rate (4) + 3 bitrates (12)
pub const VORBIS_IDENT_MIN_SIZE: usize = 28;
