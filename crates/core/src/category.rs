//! Character classes reported by unistat.
//!
//! Every class is a predicate over a single `char`. Classes overlap: a
//! character is tested against each one independently, so `'A'` is at once
//! a Letter, an Upper, a Graphic and a Print character.

use core::fmt;

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Version of the Unicode Character Database the classification tables
/// were generated from, as `(major, minor, update)`. Every class, `Space`
/// included, is answered from these tables.
pub use unicode_properties::UNICODE_VERSION;

/// One of the thirteen classifications counted per character.
///
/// Variants are declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// `Cc`
    Control,
    /// `Nd`
    Digit,
    /// Letters, marks, numbers, punctuation, symbols and `Zs` spaces.
    Graphic,
    /// `L*`
    Letter,
    /// `Ll`
    Lower,
    /// `M*`
    Mark,
    /// `N*`
    Number,
    /// Same as Graphic, except U+0020 is the only space admitted.
    Print,
    /// `P*`
    Punct,
    /// The `White_Space` property.
    Space,
    /// `S*`
    Symbol,
    /// `Lt`
    Title,
    /// `Lu`
    Upper,
}

impl CharClass {
    pub const ALL: [Self; 13] = [
        Self::Control,
        Self::Digit,
        Self::Graphic,
        Self::Letter,
        Self::Lower,
        Self::Mark,
        Self::Number,
        Self::Print,
        Self::Punct,
        Self::Space,
        Self::Symbol,
        Self::Title,
        Self::Upper,
    ];

    /// Label printed in the report, colon included.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Control => "Control:",
            Self::Digit => "Digit:",
            Self::Graphic => "Graphic:",
            Self::Letter => "Letter:",
            Self::Lower => "Lower:",
            Self::Mark => "Mark:",
            Self::Number => "Number:",
            Self::Print => "Print:",
            Self::Punct => "Punct:",
            Self::Space => "Space:",
            Self::Symbol => "Symbol:",
            Self::Title => "Title:",
            Self::Upper => "Upper:",
        }
    }

    /// Position of the class in [`CharClass::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tests whether `ch` belongs to this class.
    #[must_use]
    pub fn matches(self, ch: char) -> bool {
        let gc = ch.general_category();
        let group = ch.general_category_group();
        match self {
            Self::Control => gc == GeneralCategory::Control,
            Self::Digit => gc == GeneralCategory::DecimalNumber,
            Self::Graphic => is_visible(group) || gc == GeneralCategory::SpaceSeparator,
            Self::Letter => group == GeneralCategoryGroup::Letter,
            Self::Lower => gc == GeneralCategory::LowercaseLetter,
            Self::Mark => group == GeneralCategoryGroup::Mark,
            Self::Number => group == GeneralCategoryGroup::Number,
            Self::Print => is_visible(group) || ch == ' ',
            Self::Punct => group == GeneralCategoryGroup::Punctuation,
            Self::Space => is_white_space(ch, group),
            Self::Symbol => group == GeneralCategoryGroup::Symbol,
            Self::Title => gc == GeneralCategory::TitlecaseLetter,
            Self::Upper => gc == GeneralCategory::UppercaseLetter,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches(':'))
    }
}

/// L, M, N, P and S: the groups shared by Graphic and Print.
fn is_visible(group: GeneralCategoryGroup) -> bool {
    matches!(
        group,
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    )
}

/// The `White_Space` property: every `Z*` separator plus the C0/C1 layout
/// controls TAB, LF, VT, FF, CR and NEL.
fn is_white_space(ch: char, group: GeneralCategoryGroup) -> bool {
    group == GeneralCategoryGroup::Separator || matches!(ch, '\t'..='\r' | '\u{85}')
}
