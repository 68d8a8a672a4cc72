//! Unicode whitespace/punctuation predicates used by the flanking rules in
//! `inline::delimiter` (C8). The teacher's emphasis parser is ASCII-only; a
//! correct flanking decision needs the Unicode general category, which
//! `unicode-properties` gives us the same way
//! `discord-discord-intl/intl_markdown` uses it in its lexer.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Unicode `White_Space` property.
pub fn is_unicode_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// CommonMark's "Unicode punctuation character": general category P
/// (punctuation) or S (symbol).
pub fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
    )
}
