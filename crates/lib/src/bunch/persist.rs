//! Saving and loading bunches as literal text.

use std::{fs, path::Path, str::FromStr};

use tracing::debug;

use super::{Bunch, RenderOptions};
use crate::{Error, Result, literal};

impl Bunch {
    /// Writes the full-fidelity rendering to `path`, replacing its contents.
    ///
    /// The file holds exactly the rendered text, with no trailing newline.
    ///
    /// # Errors
    /// Fails with [`BunchError::NotLiteral`](super::BunchError::NotLiteral)
    /// before touching the file if a value could not be read back, or with
    /// [`Error::Io`] if the write fails.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_nested()?;
        let text = self.render(&RenderOptions::full());
        fs::write(path, &text)?;
        debug!(path = %path.display(), bytes = text.len(), "wrote bunch");
        Ok(())
    }

    /// Reads a bunch previously saved with [`Bunch::write`].
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Parse`] if
    /// it is not a literal expression, and
    /// [`BunchError::NotAMapping`](super::BunchError::NotAMapping) if the
    /// literal is not a dict.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = text.len(), "read bunch");
        Self::parse(&text)
    }

    /// Parses literal text into a bunch without touching the filesystem.
    pub fn parse(text: &str) -> Result<Self> {
        let literal = literal::parse(text)?;
        Ok(Self::from_nested(literal)?)
    }
}

impl FromStr for Bunch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
