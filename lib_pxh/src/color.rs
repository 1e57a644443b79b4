/// Packs an 8-bit-per-channel RGB triple into a 16-bit RGB565 value.
///
/// # Parameters
/// - `r`, `g`, `b`: channel values of one decoded pixel.
///
/// # Returns
/// The 16-bit value with red in the top 5 bits, green in the middle 6 and
/// blue in the bottom 5. Channels are truncated, never rounded.
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}
