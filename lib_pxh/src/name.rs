use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("filename {0:?} leaves an empty array name once the extension is stripped")]
    Empty(String),
    #[error("array name {0:?} starts with a digit and is not a legal C identifier")]
    LeadingDigit(String),
    #[error("array name {0:?} contains illegal character {1:?}")]
    IllegalCharacter(String, char),
}

/// Derives a C constant name from a source filename.
///
/// Strips the last extension and maps each hyphen and space to an
/// underscore, then rejects anything that would not be a legal C
/// identifier (empty, leading digit, characters outside `[A-Za-z0-9_]`)
/// rather than emitting a header that fails to compile.
pub fn array_name(filename: &str) -> Result<String, NameError> {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(filename);

    let name: String = stem
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect();

    let first = name
        .chars()
        .next()
        .ok_or_else(|| NameError::Empty(filename.to_owned()))?;
    if first.is_ascii_digit() {
        return Err(NameError::LeadingDigit(name));
    }
    if let Some(bad) = name.chars().find(|&c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Err(NameError::IllegalCharacter(name.clone(), bad));
    }

    Ok(name)
}
