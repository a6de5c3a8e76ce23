//! vCard 3.0 / 4.0 serialization of normalized contacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SerializationError;
use crate::models::NormalizedContact;

const CRLF: &str = "\r\n";

/// Timestamp layout of the `REV` property.
pub const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// vCard version written to the `VERSION` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VcfVersion {
    /// vCard 3.0 (most compatible)
    #[default]
    #[serde(rename = "3.0")]
    V3,

    /// vCard 4.0 (latest standard)
    #[serde(rename = "4.0")]
    V4,
}

impl VcfVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl fmt::Display for VcfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcfVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" | "3" => Ok(Self::V3),
            "4.0" | "4" => Ok(Self::V4),
            other => Err(format!(
                "unsupported vCard version '{}' (expected 3.0 or 4.0)",
                other
            )),
        }
    }
}

/// Serialize contacts with a fresh `REV` timestamp.
pub fn serialize(
    contacts: &[NormalizedContact],
    version: VcfVersion,
) -> Result<String, SerializationError> {
    serialize_at(contacts, version, Utc::now())
}

/// Serialize contacts, stamping every block with `revision`.
///
/// Each block is CRLF-terminated and followed by one blank line; the result
/// is the concatenation of all blocks. Every block gets a new random `UID`.
pub fn serialize_at(
    contacts: &[NormalizedContact],
    version: VcfVersion,
    revision: DateTime<Utc>,
) -> Result<String, SerializationError> {
    let rev = revision.format(REV_FORMAT).to_string();
    let mut out = String::new();

    for contact in contacts {
        check_record(contact)?;
        for line in card_lines(contact, version, &rev) {
            out.push_str(&line);
            out.push_str(CRLF);
        }
        out.push_str(CRLF);
    }

    Ok(out)
}

fn check_record(contact: &NormalizedContact) -> Result<(), SerializationError> {
    let reason = if contact.name.is_empty() {
        "empty name"
    } else if contact.email.is_empty() && contact.phone.is_empty() {
        "no email or phone"
    } else {
        return Ok(());
    };

    Err(SerializationError::InvalidRecord {
        id: contact.id.get(),
        reason: reason.to_string(),
    })
}

fn card_lines(contact: &NormalizedContact, version: VcfVersion, rev: &str) -> Vec<String> {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        format!("VERSION:{}", version),
        format!("FN:{}", escape_line_breaks(&contact.name)),
        structured_name(&contact.name),
    ];

    if !contact.email.is_empty() {
        lines.push(match version {
            VcfVersion::V4 => format!("EMAIL:{}", contact.email),
            VcfVersion::V3 => format!("EMAIL;TYPE=INTERNET:{}", contact.email),
        });
    }

    if !contact.phone.is_empty() {
        lines.push(match version {
            VcfVersion::V4 => format!("TEL:{}", contact.phone),
            VcfVersion::V3 => format!("TEL;TYPE=VOICE:{}", contact.phone),
        });
    }

    if !contact.title.is_empty() {
        lines.push(format!("TITLE:{}", escape_line_breaks(&contact.title)));
    }

    if !contact.address.is_empty() {
        lines.push(format!("ADR:;;{};;;;", escape_line_breaks(&contact.address)));
    }

    if let Some(note) = note_text(contact) {
        lines.push(format!("NOTE:{}", escape_line_breaks(&note)));
    }

    lines.push(format!("UID:{}", Uuid::new_v4()));
    lines.push(format!("REV:{}", rev));
    lines.push("END:VCARD".to_string());
    lines
}

/// `N` property. Two or more tokens split into family and given names; a
/// single token keeps the whole name in the family position.
fn structured_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, given)) if !given.is_empty() => {
            format!("N:{};{};;;", last, given.join(" "))
        }
        _ => format!("N:{};;;;", name),
    }
}

fn note_text(contact: &NormalizedContact) -> Option<String> {
    let mut notes = Vec::new();
    if !contact.comments.is_empty() {
        notes.push(format!("Comments: {}", contact.comments));
    }
    if !contact.groups.is_empty() {
        notes.push(format!("Groups: {}", contact.groups.join(", ")));
    }
    (!notes.is_empty()).then(|| notes.join(" | "))
}

/// Free-text values must stay on one content line.
fn escape_line_breaks(value: &str) -> String {
    value
        .replace("\r\n", "\\n")
        .replace(['\r', '\n'], "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use chrono::TimeZone;

    fn jane() -> NormalizedContact {
        NormalizedContact {
            id: ContactId::new(1),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        }
    }

    fn fixed_rev() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    fn lines(text: &str) -> Vec<&str> {
        text.split(CRLF).collect()
    }

    #[test]
    fn test_serialize_v3_block() {
        let text = serialize_at(&[jane()], VcfVersion::V3, fixed_rev()).unwrap();
        let l = lines(&text);

        assert_eq!(l[0], "BEGIN:VCARD");
        assert_eq!(l[1], "VERSION:3.0");
        assert_eq!(l[2], "FN:Jane Doe");
        assert_eq!(l[3], "N:Doe;Jane;;;");
        assert_eq!(l[4], "EMAIL;TYPE=INTERNET:jane@x.com");
        assert!(l[5].starts_with("UID:"));
        assert!(Uuid::parse_str(&l[5]["UID:".len()..]).is_ok());
        assert_eq!(l[6], "REV:20240305T140709Z");
        assert_eq!(l[7], "END:VCARD");
        assert!(!text.contains("TEL"));
        assert!(text.ends_with("END:VCARD\r\n\r\n"));
    }

    #[test]
    fn test_serialize_v4_properties() {
        let mut contact = jane();
        contact.phone = "+15551234567".to_string();
        let text = serialize_at(&[contact], VcfVersion::V4, fixed_rev()).unwrap();

        assert!(text.contains("VERSION:4.0\r\n"));
        assert!(text.contains("\r\nEMAIL:jane@x.com\r\n"));
        assert!(text.contains("\r\nTEL:+15551234567\r\n"));
        assert!(!text.contains("TYPE="));
    }

    #[test]
    fn test_serialize_v3_phone() {
        let mut contact = jane();
        contact.email.clear();
        contact.phone = "5551234567".to_string();
        let text = serialize_at(&[contact], VcfVersion::V3, fixed_rev()).unwrap();
        assert!(text.contains("\r\nTEL;TYPE=VOICE:5551234567\r\n"));
        assert!(!text.contains("EMAIL"));
    }

    #[test]
    fn test_structured_name() {
        assert_eq!(structured_name("Jane Doe"), "N:Doe;Jane;;;");
        assert_eq!(structured_name("Jane Q. Public"), "N:Public;Jane Q.;;;");
        assert_eq!(structured_name("Cher"), "N:Cher;;;;");
        assert_eq!(structured_name("Mary   Ann  Lee"), "N:Lee;Mary Ann;;;");
    }

    #[test]
    fn test_optional_properties() {
        let mut contact = jane();
        contact.title = "Network Engineer".to_string();
        contact.address = "1 Main St, Springfield".to_string();
        contact.comments = "On call Fridays".to_string();
        contact.groups = vec!["Ops".to_string(), "NOC".to_string()];
        let text = serialize_at(&[contact], VcfVersion::V3, fixed_rev()).unwrap();

        assert!(text.contains("\r\nTITLE:Network Engineer\r\n"));
        assert!(text.contains("\r\nADR:;;1 Main St, Springfield;;;;\r\n"));
        assert!(text.contains("\r\nNOTE:Comments: On call Fridays | Groups: Ops, NOC\r\n"));
    }

    #[test]
    fn test_note_with_groups_only() {
        let mut contact = jane();
        contact.groups = vec!["Sales".to_string()];
        let text = serialize_at(&[contact], VcfVersion::V3, fixed_rev()).unwrap();
        assert!(text.contains("\r\nNOTE:Groups: Sales\r\n"));
        assert!(!text.contains("Comments:"));
    }

    #[test]
    fn test_multiline_comments_stay_on_one_line() {
        let mut contact = jane();
        contact.comments = "line one\r\nline two\nline three".to_string();
        let text = serialize_at(&[contact], VcfVersion::V3, fixed_rev()).unwrap();
        assert!(text.contains("\r\nNOTE:Comments: line one\\nline two\\nline three\r\n"));
    }

    #[test]
    fn test_line_break_in_name() {
        let mut contact = jane();
        contact.name = "Jane\nDoe".to_string();
        let text = serialize_at(&[contact], VcfVersion::V3, fixed_rev()).unwrap();
        assert!(text.contains("\r\nFN:Jane\\nDoe\r\n"));
        assert!(text.contains("\r\nN:Doe;Jane;;;\r\n"));
    }

    #[test]
    fn test_multiple_blocks_have_unique_uids() {
        let mut bob = jane();
        bob.id = ContactId::new(2);
        bob.name = "Bob".to_string();
        let text = serialize_at(&[jane(), bob], VcfVersion::V3, fixed_rev()).unwrap();

        assert_eq!(text.matches("BEGIN:VCARD").count(), 2);
        assert!(text.contains("END:VCARD\r\n\r\nBEGIN:VCARD\r\n"));

        let uids: Vec<&str> = text.split(CRLF).filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(uids.len(), 2);
        assert_ne!(uids[0], uids[1]);
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize(&[], VcfVersion::V4).unwrap(), "");
    }

    #[test]
    fn test_rejects_invalid_record() {
        let mut contact = jane();
        contact.email.clear();
        let err = serialize(&[contact], VcfVersion::V3).unwrap_err();
        assert_eq!(
            err,
            SerializationError::InvalidRecord {
                id: 1,
                reason: "no email or phone".to_string()
            }
        );
    }

    #[test]
    fn test_rev_uses_current_utc_time() {
        let before = Utc::now().format(REV_FORMAT).to_string();
        let text = serialize(&[jane()], VcfVersion::V3).unwrap();
        let after = Utc::now().format(REV_FORMAT).to_string();

        let rev = text
            .split(CRLF)
            .find_map(|l| l.strip_prefix("REV:"))
            .unwrap();
        assert!(rev >= before.as_str() && rev <= after.as_str());
    }

    #[test]
    fn test_version_parse_and_display() {
        assert_eq!("3.0".parse::<VcfVersion>().unwrap(), VcfVersion::V3);
        assert_eq!("4.0".parse::<VcfVersion>().unwrap(), VcfVersion::V4);
        assert!("2.1".parse::<VcfVersion>().is_err());
        assert_eq!(VcfVersion::default().to_string(), "3.0");
        assert_eq!(serde_json::to_string(&VcfVersion::V4).unwrap(), "\"4.0\"");
    }
}
