//! ID prefix constants.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, e.g. `"top-a3f8b2c1"`. The
//! random part is generated by the database (`randomblob(4)`).

pub const PREFIX_CLASS: &str = "cls";
pub const PREFIX_SUBJECT: &str = "sub";
pub const PREFIX_TOPIC: &str = "top";
pub const PREFIX_USAGE: &str = "use";
pub const PREFIX_VIDEO: &str = "vid";

/// All known prefixes, in hierarchy order.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_CLASS,
    PREFIX_SUBJECT,
    PREFIX_TOPIC,
    PREFIX_USAGE,
    PREFIX_VIDEO,
];

/// Return the prefix portion of an ID, if it has one of the known prefixes.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&'static str> {
    let (prefix, rest) = id.split_once('-')?;
    if rest.is_empty() {
        return None;
    }
    ALL_PREFIXES.iter().copied().find(|p| *p == prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_known_ids() {
        assert_eq!(prefix_of("top-a3f8b2c1"), Some(PREFIX_TOPIC));
        assert_eq!(prefix_of("vid-00000001"), Some(PREFIX_VIDEO));
    }

    #[test]
    fn prefix_of_rejects_unknown() {
        assert_eq!(prefix_of("fnd-a3f8b2c1"), None);
        assert_eq!(prefix_of("top-"), None);
        assert_eq!(prefix_of("nodash"), None);
    }
}
