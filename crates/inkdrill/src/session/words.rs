/// The words a drill picks from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a plain-text word list.
    ///
    /// Words may be separated by any whitespace, several per line. Lines and
    /// tokens consisting of a single uppercase letter are alphabet section
    /// headers ("A", "B", ...) and are skipped.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.trim().is_empty() && !is_section_header(line))
            .flat_map(str::split_whitespace)
            .filter(|word| !is_section_header(word))
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.trim().is_empty())
                .collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn is_section_header(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}
