use std::io::{self, Write};

use log::debug;

use super::format::{HeaderFormat, GENERATED_NOTICE, VALUES_PER_LINE};

/// Emits one generated header onto a sink it owns for the whole run.
///
/// Values stream straight to the sink; if the run aborts midway the
/// output is simply left truncated.
pub struct HeaderWriter<W: Write> {
    sink: W,
    line_count: usize,
}

impl<W: Write> HeaderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            line_count: 0,
        }
    }

    /// Writes the fixed preamble: generation notice, the format's include
    /// directive if any, and a separating blank line.
    pub fn preamble(&mut self, format: HeaderFormat) -> io::Result<()> {
        writeln!(self.sink, "{}", GENERATED_NOTICE)?;
        if let Some(include) = format.include_line() {
            writeln!(self.sink, "{}", include)?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    /// Opens one array: a comment naming the source file and the
    /// declaration line, leaving the cursor indented for the first value.
    pub fn begin_image(
        &mut self,
        filename: &str,
        array_name: &str,
        pixel_count: usize,
        format: HeaderFormat,
    ) -> io::Result<()> {
        debug!("emitting array {} ({} values)", array_name, pixel_count);
        writeln!(self.sink, "// Image: {}", filename)?;
        write!(
            self.sink,
            "const uint16_t {}[{}]{} = {{\n    ",
            array_name,
            pixel_count,
            format.placement_suffix()
        )?;
        self.line_count = 0;
        Ok(())
    }

    /// Appends one pixel as a hex literal, breaking the line after every
    /// twelfth value. Every value gets a trailing comma, the last included.
    pub fn pixel(&mut self, value: u16) -> io::Result<()> {
        write!(self.sink, "0x{:04X}, ", value)?;
        self.line_count += 1;
        if self.line_count == VALUES_PER_LINE {
            write!(self.sink, "\n    ")?;
            self.line_count = 0;
        }
        Ok(())
    }

    /// Closes the array and leaves a blank line before the next one.
    pub fn end_image(&mut self) -> io::Result<()> {
        write!(self.sink, "\n}};\n\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut HeaderWriter<&mut Vec<u8>>)>(f: F) -> String {
        let mut buf = Vec::new();
        let mut writer = HeaderWriter::new(&mut buf);
        f(&mut writer);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_preamble_arduino() {
        let out = render(|w| w.preamble(HeaderFormat::Arduino).unwrap());
        assert_eq!(out, "// Auto-generated RGB565 images\n#include <Arduino.h>\n\n");
    }

    #[test]
    fn test_preamble_bare() {
        let out = render(|w| w.preamble(HeaderFormat::Bare).unwrap());
        assert_eq!(out, "// Auto-generated RGB565 images\n\n");
    }

    #[test]
    fn test_declaration_line() {
        let out = render(|w| {
            w.begin_image("red.png", "red", 4800, HeaderFormat::Arduino)
                .unwrap()
        });
        assert_eq!(
            out,
            "// Image: red.png\nconst uint16_t red[4800] PROGMEM = {\n    "
        );
    }

    #[test]
    fn test_declaration_line_bare() {
        let out = render(|w| {
            w.begin_image("red.png", "red", 4800, HeaderFormat::Bare)
                .unwrap()
        });
        assert!(out.contains("const uint16_t red[4800] = {"));
    }

    #[test]
    fn test_line_breaks_after_twelve_values() {
        let out = render(|w| {
            w.begin_image("a.png", "a", 24, HeaderFormat::Bare).unwrap();
            for _ in 0..13 {
                w.pixel(0xF800).unwrap();
            }
        });
        let tail = out.split("{\n    ").nth(1).unwrap();
        let mut lines = tail.lines();
        assert_eq!(lines.next().unwrap(), "0xF800, ".repeat(12));
        assert_eq!(lines.next().unwrap(), "    0xF800, ");
    }

    #[test]
    fn test_trailing_comma_on_last_value() {
        let out = render(|w| {
            w.begin_image("a.png", "a", 1, HeaderFormat::Bare).unwrap();
            w.pixel(0x001F).unwrap();
            w.end_image().unwrap();
        });
        assert!(out.contains("0x001F, \n};\n\n"));
    }
}
