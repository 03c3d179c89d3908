//! Parser for `dconf dump` output of the GNOME Terminal profile list.
//!
//! The dump looks like this (blocks separated by one blank line):
//!
//! ```text
//! [/]
//! default='b0682302-667e-4ceb-b714-c05924ab92fc'
//! list=['b1dcc9dd-5262-4d8d-a863-c897e6d979b9', 'b0682302-667e-4ceb-b714-c05924ab92fc']
//!
//! [:b0682302-667e-4ceb-b714-c05924ab92fc]
//! background-color='rgb(255,255,255)'
//! visible-name='light'
//! ```
//!
//! dconf sorts keys alphabetically, so `visible-name` is always the last line
//! of a profile block. That is checked rather than assumed.

use std::collections::HashMap;

use crate::error::ParseError;

const PROFILE_HEADER_PREFIX: &str = "[:";
const PROFILE_HEADER_SUFFIX: &str = "]";
const VISIBLE_NAME_KEY: &str = "visible-name=";
const UUID_LEN: usize = 36;

/// Profiles recovered from one dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDump {
    /// Identifier of the profile currently set as default.
    pub current_identifier: String,
    /// Display name -> identifier.
    pub name_to_identifier: HashMap<String, String>,
    /// Identifiers in profile menu order.
    pub order: Vec<String>,
}

impl ProfileDump {
    /// Exact-name lookup; no fuzzy matching.
    pub fn identifier_for(&self, name: &str) -> Option<&str> {
        self.name_to_identifier.get(name).map(String::as_str)
    }
}

/// Parse a profile dump into names, identifiers, and menu order.
pub fn parse_profile_dump(dump: &str) -> Result<ProfileDump, ParseError> {
    let trimmed = dump.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyDump);
    }

    let mut blocks = trimmed.split("\n\n");
    let meta = blocks.next().unwrap_or_default();
    let meta_lines: Vec<&str> = meta.lines().collect();

    // Line 0 is the `[/]` header.
    let default_line = meta_lines
        .get(1)
        .ok_or(ParseError::MissingMetaLine("default"))?;
    let current_identifier = first_quoted(default_line)
        .ok_or_else(|| ParseError::UnquotedMetaValue(default_line.to_string()))?
        .to_string();

    let list_line = meta_lines
        .get(2)
        .ok_or(ParseError::MissingMetaLine("list"))?;
    let order = list_line
        .split(',')
        .map(|piece| {
            first_quoted(piece)
                .map(str::to_string)
                .ok_or_else(|| ParseError::UnquotedMetaValue(list_line.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut name_to_identifier = HashMap::new();
    for block in blocks {
        let (identifier, name) = parse_profile_block(block)?;
        // Names are not guaranteed unique; the later block wins.
        name_to_identifier.insert(name, identifier);
    }

    Ok(ProfileDump {
        current_identifier,
        name_to_identifier,
        order,
    })
}

fn parse_profile_block(block: &str) -> Result<(String, String), ParseError> {
    let header = block.lines().next().unwrap_or_default();
    let identifier = profile_identifier(header)
        .ok_or_else(|| ParseError::BadProfileHeader(header.to_string()))?;

    let last = block.lines().last().unwrap_or_default();
    let Some(value) = last.strip_prefix(VISIBLE_NAME_KEY) else {
        return Err(ParseError::MissingVisibleName(header.to_string()));
    };
    let name = first_quoted(value).ok_or_else(|| ParseError::UnquotedName(last.to_string()))?;

    Ok((identifier.to_string(), name.to_string()))
}

/// Extract the identifier from a `[:<uuid>]` header line.
fn profile_identifier(header: &str) -> Option<&str> {
    let inner = header
        .trim()
        .strip_prefix(PROFILE_HEADER_PREFIX)?
        .strip_suffix(PROFILE_HEADER_SUFFIX)?;
    is_uuid_text(inner).then_some(inner)
}

fn is_uuid_text(text: &str) -> bool {
    text.len() == UUID_LEN
        && text.char_indices().all(|(idx, ch)| match idx {
            8 | 13 | 18 | 23 => ch == '-',
            _ => ch.is_ascii_hexdigit(),
        })
}

/// Content between the first pair of single quotes.
fn first_quoted(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('\'')?;
    let (value, _) = rest.split_once('\'')?;
    Some(value)
}
