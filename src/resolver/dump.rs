use crate::resolver::{Context, IdentId, IdentTarget};
use std::fmt::Write;

impl Context {
    /// Write a one-line description of `ident`, indented by `depth` spaces.
    pub fn write_ident(
        &self,
        w: &mut impl Write,
        ident: IdentId,
        depth: u8,
    ) -> Result<(), std::fmt::Error> {
        let identifier = self.ident(ident);
        write!(w, "{}", " ".repeat(depth as usize))?;
        write!(w, "ident {} (0x{}) -> ", identifier.name(), ident)?;
        match identifier.target() {
            IdentTarget::Function(function) => {
                writeln!(w, "{} {}", self.function(function).kind(), function)
            }
            IdentTarget::Variable(variable) => writeln!(w, "variable {variable}"),
        }
    }

    /// Append the description of `ident` to `buffer`.
    pub fn dump_ident_str(
        &self,
        buffer: &mut String,
        ident: IdentId,
    ) -> Result<(), std::fmt::Error> {
        self.write_ident(buffer, ident, 0)
    }

    /// Print the description of `ident` to stdout.
    pub fn dump_ident(&self, ident: IdentId) -> Result<(), std::io::Error> {
        let mut buffer = String::new();
        self.dump_ident_str(&mut buffer, ident)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut stdout = std::io::stdout().lock();
        std::io::Write::write_all(&mut stdout, buffer.as_bytes())?;
        std::io::Write::flush(&mut stdout)
    }
}
