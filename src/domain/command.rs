use std::fmt;

use crate::domain::AppError;

/// An external command line: the program to spawn and its arguments.
///
/// Built from a configured command vector plus operation-specific
/// arguments; the rendered form is what failure messages quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// Combine a configured command vector with trailing arguments.
    ///
    /// The first element of `parts` is the program; an empty vector is a
    /// configuration error.
    pub fn from_parts(
        parts: &[String],
        tail: impl IntoIterator<Item = String>,
    ) -> Result<Self, AppError> {
        let (program, leading) = parts
            .split_first()
            .ok_or_else(|| AppError::configuration("configured command must not be empty"))?;

        let mut args: Vec<String> = leading.to_vec();
        args.extend(tail);
        Ok(Self { program: program.clone(), args })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
