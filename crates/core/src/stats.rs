use crate::category::CharClass;

/// Per-class character counters for one input stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStats {
    /// Number of characters processed.
    pub total: usize,
    /// Characters whose encoding took more than one byte.
    pub multibyte: usize,
    pub control: usize,
    pub digit: usize,
    pub graphic: usize,
    pub letter: usize,
    pub lower: usize,
    pub mark: usize,
    pub number: usize,
    pub print: usize,
    pub punct: usize,
    pub space: usize,
    pub symbol: usize,
    pub title: usize,
    pub upper: usize,
}

impl CharacterStats {
    /// Creates a zeroed record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one decoded character that occupied `encoded_len` bytes.
    pub fn record(&mut self, ch: char, encoded_len: usize) {
        self.total += 1;
        for class in CharClass::ALL {
            if class.matches(ch) {
                *self.counter_mut(class) += 1;
            }
        }
        if encoded_len > 1 {
            self.multibyte += 1;
        }
    }

    /// Returns the counter for `class`.
    #[must_use]
    pub const fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Control => self.control,
            CharClass::Digit => self.digit,
            CharClass::Graphic => self.graphic,
            CharClass::Letter => self.letter,
            CharClass::Lower => self.lower,
            CharClass::Mark => self.mark,
            CharClass::Number => self.number,
            CharClass::Print => self.print,
            CharClass::Punct => self.punct,
            CharClass::Space => self.space,
            CharClass::Symbol => self.symbol,
            CharClass::Title => self.title,
            CharClass::Upper => self.upper,
        }
    }

    /// Class counters in report order.
    pub fn iter(&self) -> impl Iterator<Item = (CharClass, usize)> + '_ {
        CharClass::ALL.into_iter().map(|class| (class, self.count(class)))
    }

    fn counter_mut(&mut self, class: CharClass) -> &mut usize {
        match class {
            CharClass::Control => &mut self.control,
            CharClass::Digit => &mut self.digit,
            CharClass::Graphic => &mut self.graphic,
            CharClass::Letter => &mut self.letter,
            CharClass::Lower => &mut self.lower,
            CharClass::Mark => &mut self.mark,
            CharClass::Number => &mut self.number,
            CharClass::Print => &mut self.print,
            CharClass::Punct => &mut self.punct,
            CharClass::Space => &mut self.space,
            CharClass::Symbol => &mut self.symbol,
            CharClass::Title => &mut self.title,
            CharClass::Upper => &mut self.upper,
        }
    }
}

/// Counts already-decoded text, taking each character's UTF-8 length as its
/// encoded size.
impl Extend<char> for CharacterStats {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.record(ch, ch.len_utf8());
        }
    }
}

impl FromIterator<char> for CharacterStats {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
