//! Text rendering with accent hints.
//!
//! Containers render to a [`RenderedText`]: the element texts, the separator
//! that joins them, and a per-element accent flag. The flag only says which
//! elements a front end may highlight; colors and terminal codes are the front
//! end's business. `Display` yields the plain joined text.

use std::fmt;

/// One rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The element's text.
    pub text: String,
    /// Whether the element should be highlighted.
    pub accent: bool,
}

/// A rendered container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedText {
    segments: Vec<Segment>,
    separator: &'static str,
    placeholder: Option<&'static str>,
}

impl RenderedText {
    /// Builds a rendering from element texts, accenting those for which
    /// `accent(index)` returns `true`.
    pub fn new<I>(texts: I, separator: &'static str, mut accent: impl FnMut(usize) -> bool) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let segments = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Segment {
                text,
                accent: accent(i),
            })
            .collect();
        Self {
            segments,
            separator,
            placeholder: None,
        }
    }

    /// Sets the text shown when there are no segments.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the separator placed between segments.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        self.separator
    }

    /// Returns `true` if any segment carries an accent.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.segments.iter().any(|s| s.accent)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(self.placeholder.unwrap_or(""));
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            f.write_str(&seg.text)?;
        }
        Ok(())
    }
}
