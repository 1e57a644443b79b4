pub const GENERATED_NOTICE: &str = "// Auto-generated RGB565 images";
pub const ARDUINO_INCLUDE: &str = "#include <Arduino.h>";

/// Pixel literals emitted before the line is broken.
pub const VALUES_PER_LINE: usize = 12;

/// Selects the flavor of the generated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderFormat {
    /// Arduino/ESP32 header: hardware include plus `PROGMEM` placement so
    /// the arrays stay in flash.
    #[default]
    Arduino,
    /// Platform-agnostic arrays, no hardware include and no placement
    /// qualifier.
    Bare,
}

impl HeaderFormat {
    /// Include directive for the preamble, if the format carries one.
    pub fn include_line(&self) -> Option<&'static str> {
        match self {
            HeaderFormat::Arduino => Some(ARDUINO_INCLUDE),
            HeaderFormat::Bare => None,
        }
    }

    /// Text inserted between the element count and `=` of a declaration.
    pub fn placement_suffix(&self) -> &'static str {
        match self {
            HeaderFormat::Arduino => " PROGMEM",
            HeaderFormat::Bare => "",
        }
    }
}
